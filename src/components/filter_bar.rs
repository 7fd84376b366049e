use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::filter::{FilterKey, FilterState};

pub struct FilterBarProps<'a> {
    pub filters: &'a FilterState,
    pub is_busy: bool,
    pub pending_updates: usize,
}

/// Current filter selectors. Unset filters show the server default dimmed.
#[derive(Default)]
pub struct FilterBar;

fn shortcut(key: FilterKey) -> char {
    match key {
        FilterKey::Gen => 'g',
        FilterKey::Cat => 'c',
        FilterKey::Own => 'o',
    }
}

impl Component<Action> for FilterBar {
    type Props<'a> = FilterBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for key in FilterKey::ALL {
            let value = match props.filters.get(key) {
                Some(value) => Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(
                    key.server_default().to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            spans.push(Span::raw(format!(" {}: ", key.label())));
            spans.push(value);
            spans.push(Span::styled(
                format!(" [{}] ", shortcut(key)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if props.is_busy {
            spans.push(Span::styled(" loading…", Style::default().fg(Color::Cyan)));
        }
        if props.pending_updates > 0 {
            spans.push(Span::styled(
                format!(" syncing {}", props.pending_updates),
                Style::default().fg(Color::Cyan),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
