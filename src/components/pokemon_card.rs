use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::view::{CardView, OptionControl};

pub const CARD_WIDTH: u16 = 22;
pub const CARD_HEIGHT: u16 = 5;

/// Width of one option slot, spacer included.
const SLOT_WIDTH: usize = 3;

const OWNED_ACCENT: Color = Color::Rgb(104, 204, 120);
const SELECTED_ACCENT: Color = Color::Rgb(222, 196, 120);
const LEGENDARY_ACCENT: Color = Color::Rgb(200, 150, 255);
const REGIONAL_ACCENT: Color = Color::Rgb(100, 180, 255);

pub struct PokemonCardProps<'a> {
    pub card: &'a CardView,
    pub is_selected: bool,
}

/// One catalog entry: name, dex number, badges and the options row.
#[derive(Default)]
pub struct PokemonCard;

impl PokemonCard {
    fn option_span(control: &OptionControl) -> Span<'static> {
        let style = match (control.interactive, control.owned) {
            (true, true) => Style::default()
                .fg(OWNED_ACCENT)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Reset),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        Span::styled(format!(" {} ", control.glyph()), style)
    }

    fn options_line(card: &CardView) -> Line<'static> {
        let mut spans = Vec::with_capacity(card.options.len() + 1);
        for (idx, control) in card.options.iter().enumerate() {
            spans.push(Self::option_span(control));
            if idx == 0 && card.gender_spacer {
                spans.push(Span::raw(" ".repeat(SLOT_WIDTH)));
            }
        }
        Line::from(spans)
    }

    fn dex_line(card: &CardView) -> Line<'static> {
        let mut spans = vec![Span::styled(
            card.dex_label.clone(),
            Style::default().fg(Color::DarkGray),
        )];
        if card.legendary {
            spans.push(Span::styled(" LEG", Style::default().fg(LEGENDARY_ACCENT)));
        }
        if card.regional {
            spans.push(Span::styled(" REG", Style::default().fg(REGIONAL_ACCENT)));
        }
        Line::from(spans)
    }
}

impl Component<Action> for PokemonCard {
    type Props<'a> = PokemonCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let card = props.card;

        let border_style = if props.is_selected {
            Style::default().fg(SELECTED_ACCENT)
        } else if card.owned {
            Style::default().fg(OWNED_ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let name_style = if card.owned {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let name: String = card.name.chars().take(inner_width).collect();

        let block = Block::bordered()
            .border_type(if props.is_selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        let lines = vec![
            Line::from(Span::styled(name, name_style)),
            Self::dex_line(card),
            Self::options_line(card),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
