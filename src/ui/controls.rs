//! Arrangement choice, provider stepper, and the estimated cost line

use crate::app::{AppState, Focus};
use crate::money::Money;
use crate::theme::{Styles, Theme, UiText};
use crate::types::ProviderArrangement;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

fn section_block(focus: Focus, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", focus.title()))
        .border_style(Theme::section_border(focused))
}

/// Radio line, e.g. `(*) Group   ( ) Solo`
pub fn arrangement_line(current: ProviderArrangement) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, option) in ProviderArrangement::iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let (mark, style) = if option == current {
            ("(*) ", Styles::picked())
        } else {
            ("( ) ", Styles::text())
        };
        spans.push(Span::styled(format!("{}{}", mark, option), style));
    }
    Line::from(spans)
}

pub fn render_arrangement(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Arrangement;
    let widget = Paragraph::new(arrangement_line(state.arrangement))
        .block(section_block(Focus::Arrangement, focused))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Stepper line, e.g. `[ - ]   3   [ + ]`
pub fn stepper_line(field: &str, editing: bool, focused: bool) -> Line<'static> {
    let button = if focused {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    let field_style = if editing { Styles::editing() } else { Styles::text() };

    Line::from(vec![
        Span::styled("[ - ]", button),
        Span::raw("  "),
        Span::styled(format!("{:^8}", field), field_style),
        Span::raw("  "),
        Span::styled("[ + ]", button),
    ])
}

pub fn render_stepper(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Providers;
    let widget = Paragraph::new(stepper_line(
        &state.count_field_text(),
        state.is_editing_count(),
        focused,
    ))
    .block(section_block(Focus::Providers, focused))
    .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// `Estimated Cost: $N`
pub fn total_text(total: Money) -> String {
    format!("{}{}", UiText::COST_LABEL, total)
}

pub fn render_total(f: &mut Frame, state: &AppState, area: Rect) {
    let widget = Paragraph::new(total_text(state.quote()))
        .block(Block::default().borders(Borders::ALL))
        .style(Styles::total())
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
