//! User interface rendering module
//!
//! - `header` - Title and status line
//! - `plans` - Plan list with icon placeholders
//! - `controls` - Arrangement choice, provider stepper, estimated cost

mod controls;
mod header;
mod plans;

pub use controls::{arrangement_line, stepper_line, total_text};
pub use header::HeaderRenderer;
pub use plans::icon_cell_text;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{BindingScope, KeybindingContext};
use crate::components::nav_bar::NavBar;
use crate::theme::UiConstants;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// UI renderer for the application
///
/// Lays out the form top to bottom and delegates each section to its
/// submodule. The estimated cost is recomputed on every frame.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete form
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TITLE_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(UiConstants::CONTROL_HEIGHT),
                Constraint::Length(UiConstants::CONTROL_HEIGHT),
                Constraint::Length(UiConstants::TOTAL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render_title(f, chunks[0]);
        plans::render_plans(f, state, chunks[1]);
        controls::render_arrangement(f, state, chunks[2]);
        controls::render_stepper(f, state, chunks[3]);
        controls::render_total(f, state, chunks[4]);
        header::render_status(f, chunks[5], &state.status_message, state.icons.pending());

        let scope = BindingScope::for_state(state);
        NavBar::new(keybinding_ctx.get_nav_items(scope)).render(f, chunks[6]);

        // Help overlay goes on top of everything
        if state.help_visible {
            HelpOverlay::new(scope, keybinding_ctx).render(f, f.area());
        }
    }
}
