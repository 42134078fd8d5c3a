//! Rendering tests using ratatui's TestBackend

use coverage_quote::app::{AppState, Focus};
use coverage_quote::components::keybindings::KeybindingContext;
use coverage_quote::icons::{IconImage, IconMessage};
use coverage_quote::ui::UiRenderer;
use ratatui::{Terminal, backend::TestBackend};

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(80, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");
    let renderer = UiRenderer::new();
    let ctx = KeybindingContext::new();

    terminal
        .draw(|f| renderer.render(f, state, &ctx))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_form_shows_title_plans_and_total() {
    let screen = render(&AppState::default());

    assert!(screen.contains("Welcome to Our Service"));
    for name in ["Aetna", "Cigna", "Medicaid", "Medicare"] {
        assert!(screen.contains(name), "missing {}", name);
    }
    assert!(screen.contains("Estimated Cost: $0"));
    assert!(screen.contains("(*) Group"));
}

#[test]
fn test_pending_icons_show_placeholder() {
    let screen = render(&AppState::default());
    assert!(screen.contains("Loading..."));
}

#[test]
fn test_loaded_icon_replaces_placeholder() {
    let mut state = AppState::default();
    state.apply_icon_message(IconMessage::Loaded {
        name: "Aetna".to_string(),
        image: IconImage {
            badge: "AE".to_string(),
            bytes: 0,
        },
    });

    let screen = render(&state);
    let aetna_row = screen
        .lines()
        .find(|line| line.contains("Aetna"))
        .expect("Aetna row");
    assert!(aetna_row.contains("[AE]"));
    assert!(!aetna_row.contains("Loading..."));
}

#[test]
fn test_total_follows_selection_and_count() {
    let mut state = AppState::default();
    state.toggle("Aetna");
    state.toggle("Cigna");
    state.set_providers_direct("3");

    let screen = render(&state);
    assert!(screen.contains("Estimated Cost: $450"));
    assert!(screen.contains("[x]"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut state = AppState::default();
    state.focus = Focus::Providers;
    state.toggle_help();

    let screen = render(&state);
    assert!(screen.contains("Coverage Quote Help"));
}
