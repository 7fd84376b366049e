use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, FilterBar, FilterBarProps, PokemonCard, PokemonCardProps, CARD_HEIGHT, CARD_WIDTH,
};
use crate::action::Action;
use crate::filter::FilterKey;
use crate::record::Variant;
use crate::state::AppState;
use crate::view::{CardView, CatalogView};

pub struct CollectionScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Filter bar, card grid, detail line and key hints.
pub struct CollectionScreen {
    /// Grid width from the last render, used for up/down navigation
    columns: usize,
}

impl Default for CollectionScreen {
    fn default() -> Self {
        Self { columns: 1 }
    }
}

fn toggle_variant(code: KeyCode) -> Option<Variant> {
    match code {
        KeyCode::Char('m') => Some(Variant::Male),
        KeyCode::Char('f') => Some(Variant::Female),
        KeyCode::Char('u') => Some(Variant::Ungendered),
        KeyCode::Char('s') => Some(Variant::Shiny),
        KeyCode::Char('a') => Some(Variant::Alolan),
        KeyCode::Char('L') => Some(Variant::Lucky),
        _ => None,
    }
}

fn filter_key(code: KeyCode) -> Option<(FilterKey, bool)> {
    match code {
        KeyCode::Char('g') => Some((FilterKey::Gen, false)),
        KeyCode::Char('c') => Some((FilterKey::Cat, false)),
        KeyCode::Char('o') => Some((FilterKey::Own, false)),
        KeyCode::Char('G') => Some((FilterKey::Gen, true)),
        KeyCode::Char('C') => Some((FilterKey::Cat, true)),
        KeyCode::Char('O') => Some((FilterKey::Own, true)),
        _ => None,
    }
}

/// `0` selects every generation, `1`-`8` a single one.
fn generation_key(code: KeyCode) -> Option<&'static str> {
    let KeyCode::Char(c) = code else {
        return None;
    };
    let idx = c.to_digit(10)? as usize;
    let options = FilterKey::Gen.options();
    (idx < options.len()).then(|| options[idx])
}

impl CollectionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn move_selection(&self, state: &AppState, code: KeyCode) -> Option<Action> {
        let count = state.record_count();
        if count == 0 {
            return None;
        }
        let current = state.selected;
        let columns = self.columns.max(1);
        let next = match code {
            KeyCode::Left | KeyCode::Char('h') => current.checked_sub(1)?,
            KeyCode::Right | KeyCode::Char('l') => current + 1,
            KeyCode::Up | KeyCode::Char('k') => current.checked_sub(columns)?,
            KeyCode::Down | KeyCode::Char('j') => current + columns,
            _ => return None,
        };
        (next < count).then_some(Action::SelectionSet(next))
    }

    fn toggle_selected(state: &AppState, variant: Variant) -> Option<Action> {
        let view = state.view()?;
        let card = view.cards().get(state.selected)?;
        if !card.is_interactive(variant) {
            return None;
        }
        Some(Action::OwnershipToggle {
            name: card.name.clone(),
            flag: variant.flag(),
        })
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, cards: &[CardView], selected: usize) {
        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.columns = columns;

        let selected_row = selected / columns;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        let mut card = PokemonCard;
        for (idx, view) in cards.iter().enumerate().skip(first_row * columns) {
            let row = idx / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let col = idx % columns;
            let cell = Rect {
                x: area.x + col as u16 * CARD_WIDTH,
                y: area.y + row as u16 * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT.min(area.height),
            };
            card.render(
                frame,
                cell,
                PokemonCardProps {
                    card: view,
                    is_selected: idx == selected,
                },
            );
        }
    }

    fn render_message(frame: &mut Frame, area: Rect, message: &str) {
        frame.render_widget(
            Paragraph::new(message.to_string())
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn detail_line(card: &CardView) -> Line<'static> {
        let owned: Vec<&str> = card.markers.iter().map(|flag| flag.key()).collect();
        let owned = if owned.is_empty() {
            "none".to_string()
        } else {
            owned.join(", ")
        };
        Line::from(vec![
            Span::raw(format!(" {} {} ", card.name, card.dex_label)),
            Span::styled(
                format!("sprite {} ", card.sprite_url),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!("owned: {owned}")),
        ])
    }
}

impl Component<Action> for CollectionScreen {
    type Props<'a> = CollectionScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        if let Some(variant) = toggle_variant(key.code) {
            return Self::toggle_selected(props.state, variant);
        }
        if let Some((filter, clear)) = filter_key(key.code) {
            return Some(if clear {
                Action::FilterClear(filter)
            } else {
                Action::FilterCycle(filter)
            });
        }
        if let Some(generation) = generation_key(key.code) {
            return Some(Action::FilterChange(FilterKey::Gen, generation.to_string()));
        }
        match key.code {
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::CatalogFetch),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            code => self.move_selection(props.state, code),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Filters
            Constraint::Min(1),    // Cards
            Constraint::Length(1), // Selected card
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut filter_bar = FilterBar;
        filter_bar.render(
            frame,
            chunks[0],
            FilterBarProps {
                filters: &state.filters,
                is_busy: state.catalog.is_loading() || state.is_refreshing,
                pending_updates: state.pending_updates,
            },
        );

        match state.view() {
            Some(CatalogView::Cards(cards)) => {
                self.render_grid(frame, chunks[1], &cards, state.selected);
                if let Some(card) = cards.get(state.selected) {
                    frame.render_widget(Paragraph::new(Self::detail_line(card)), chunks[2]);
                }
            }
            Some(CatalogView::Empty { message }) => {
                Self::render_message(frame, chunks[1], message);
            }
            None if state.catalog.is_loading() => {
                Self::render_message(frame, chunks[1], "Loading collection…");
            }
            None => {
                Self::render_message(frame, chunks[1], "Press r to fetch the collection.");
            }
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("hjkl", "move"),
                    StatusBarHint::new("m/f/u/s/a/L", "toggle"),
                    StatusBarHint::new("g/c/o", "filter"),
                    StatusBarHint::new("0-8", "gen"),
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::record::{OwnedFlag, PokemonRecord};
    use crossterm::event::KeyEvent;
    use tui_dispatch::testing::*;
    use tui_dispatch::DataResource;

    fn state_with(records: Vec<PokemonRecord>) -> AppState {
        AppState {
            catalog: DataResource::Loaded(Catalog::new(records)),
            ..Default::default()
        }
    }

    fn keypress(component: &mut CollectionScreen, state: &AppState, k: &str) -> Vec<Action> {
        press(component, state, key(k))
    }

    fn press(component: &mut CollectionScreen, state: &AppState, k: KeyEvent) -> Vec<Action> {
        component
            .handle_event(
                &EventKind::Key(k),
                CollectionScreenProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }

    fn eevee() -> PokemonRecord {
        PokemonRecord {
            name: "Eevee".into(),
            dex: 133,
            male: true,
            female: true,
            shiny: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_key_on_existing_variant() {
        let state = state_with(vec![eevee()]);
        let mut component = CollectionScreen::new();

        let actions = keypress(&mut component, &state, "s");
        actions.assert_count(1);
        actions.assert_first(Action::OwnershipToggle {
            name: "Eevee".into(),
            flag: OwnedFlag::Shiny,
        });
    }

    #[test]
    fn test_toggle_key_on_missing_variant_is_ignored() {
        let state = state_with(vec![eevee()]);
        let mut component = CollectionScreen::new();

        keypress(&mut component, &state, "a").assert_empty();
        keypress(&mut component, &state, "u").assert_empty();
    }

    #[test]
    fn test_lucky_always_toggles() {
        let state = state_with(vec![PokemonRecord {
            name: "Ditto".into(),
            dex: 132,
            ..Default::default()
        }]);
        let mut component = CollectionScreen::new();

        press(&mut component, &state, char_key('L')).assert_first(Action::OwnershipToggle {
            name: "Ditto".into(),
            flag: OwnedFlag::Lucky,
        });
        press(&mut component, &state, char_key('l')).assert_empty();
    }

    #[test]
    fn test_filter_keys() {
        let state = AppState::default();
        let mut component = CollectionScreen::new();

        keypress(&mut component, &state, "g").assert_first(Action::FilterCycle(FilterKey::Gen));
        keypress(&mut component, &state, "o").assert_first(Action::FilterCycle(FilterKey::Own));
        press(&mut component, &state, char_key('O'))
            .assert_first(Action::FilterClear(FilterKey::Own));
        press(&mut component, &state, char_key('G'))
            .assert_first(Action::FilterClear(FilterKey::Gen));
    }

    #[test]
    fn test_digit_keys_set_generation() {
        let state = AppState::default();
        let mut component = CollectionScreen::new();

        keypress(&mut component, &state, "3")
            .assert_first(Action::FilterChange(FilterKey::Gen, "3".into()));
        keypress(&mut component, &state, "0")
            .assert_first(Action::FilterChange(FilterKey::Gen, "all".into()));
        keypress(&mut component, &state, "9").assert_empty();
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let state = state_with(vec![eevee(), PokemonRecord {
            name: "Vaporeon".into(),
            dex: 134,
            ..Default::default()
        }]);
        let mut component = CollectionScreen::new();

        keypress(&mut component, &state, "l").assert_first(Action::SelectionSet(1));
        keypress(&mut component, &state, "h").assert_empty();
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let state = state_with(vec![eevee()]);
        let mut component = CollectionScreen::new();

        let actions: Vec<_> = component
            .handle_event(
                &EventKind::Key(key("s")),
                CollectionScreenProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_tracks_grid_columns() {
        let state = state_with(vec![eevee()]);
        let mut component = CollectionScreen::new();
        let mut render = RenderHarness::new(CARD_WIDTH * 3 + 5, 20);

        render.render_to_string_plain(|frame| {
            component.render(
                frame,
                frame.area(),
                CollectionScreenProps {
                    state: &state,
                    is_focused: true,
                },
            );
        });
        assert_eq!(component.columns(), 3);
    }
}
