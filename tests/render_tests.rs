//! Render tests for the collection screen using RenderHarness

use dextrack::{
    catalog::Catalog,
    components::{CollectionScreen, CollectionScreenProps, Component, CARD_WIDTH},
    record::PokemonRecord,
    state::AppState,
    view::NO_RESULTS_MESSAGE,
};
use tui_dispatch::{testing::*, DataResource};

fn render_screen(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = CollectionScreen::new();
    render.render_to_string_plain(|frame| {
        let props = CollectionScreenProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn loaded(records: Vec<PokemonRecord>) -> AppState {
    AppState {
        catalog: DataResource::Loaded(Catalog::new(records)),
        ..Default::default()
    }
}

fn record(name: &str, dex: u32) -> PokemonRecord {
    PokemonRecord {
        name: name.into(),
        dex,
        ..Default::default()
    }
}

#[test]
fn test_render_initial_state() {
    let output = render_screen(&AppState::default(), 80, 20);
    assert!(output.contains("Press r"), "Should prompt to fetch:\n{output}");
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        catalog: DataResource::Loading,
        ..Default::default()
    };
    let output = render_screen(&state, 80, 20);
    assert!(output.contains("Loading collection"));
    assert!(output.contains("loading…"), "Filter bar shows busy marker");
}

#[test]
fn test_render_empty_catalog_shows_placeholder() {
    // Wide enough for the message to fit on one line
    let width = NO_RESULTS_MESSAGE.chars().count() as u16 + 2;
    let output = render_screen(&loaded(vec![]), width, 10);
    assert!(
        output.contains(NO_RESULTS_MESSAGE),
        "Placeholder should be visible:\n{output}"
    );
}

#[test]
fn test_render_one_card_per_record() {
    let state = loaded(vec![
        record("Bulbasaur", 1),
        record("Ivysaur", 2),
        record("Venusaur", 3),
    ]);
    let output = render_screen(&state, CARD_WIDTH * 3, 20);

    for (name, dex) in [("Bulbasaur", "#001"), ("Ivysaur", "#002"), ("Venusaur", "#003")] {
        assert_eq!(output.matches(name).count(), if name == "Bulbasaur" { 2 } else { 1 });
        assert!(output.contains(dex));
    }
}

#[test]
fn test_render_detail_line_for_selection() {
    let state = AppState {
        selected: 1,
        ..loaded(vec![
            record("Bulbasaur", 1),
            PokemonRecord {
                luckyowned: true,
                ..record("Ivysaur", 2)
            },
        ])
    };
    let output = render_screen(&state, 120, 20);
    assert!(output.contains("sprite https://s3-eu-west-1.amazonaws.com/dex-static-img/2.png"));
    assert!(output.contains("owned: luckyowned"));
}

#[test]
fn test_render_help_bar() {
    let output = render_screen(&AppState::default(), 100, 20);
    assert!(output.contains("toggle"), "Should show toggle hint");
    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_scrolls_to_selection() {
    let records: Vec<_> = (1..=12).map(|dex| record(&format!("Mon{dex:02}"), dex)).collect();
    let state = AppState {
        selected: 11,
        ..loaded(records)
    };
    // One column, room for two card rows
    let output = render_screen(&state, CARD_WIDTH, 4 + 2 * 5);
    assert!(output.contains("Mon12"));
    assert!(!output.contains("Mon01"));
}
