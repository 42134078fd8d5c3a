//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Form state (AppState, Focus)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Focus};

use crate::catalog::CatalogProvider;
use crate::components::keybindings::{BindingScope, KeyAction, KeybindingContext};
use crate::error::Result;
use crate::icons::{IconMessage, IconResolver, spawn_icon_loader};
use crate::types::ProviderArrangement;
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tracing::{debug, info};

/// How long the loop waits for input before redrawing
const TICK: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch, nav bar and help
    keybinding_context: KeybindingContext,
    /// Icon loader results, drained every tick
    icon_rx: Receiver<IconMessage>,
}

impl App {
    /// Create the application and start loading icons in the background
    pub fn new(state: AppState, resolver: Arc<dyn IconResolver>) -> Self {
        info!(offerings = state.icons.pending(), "creating quote form");
        let (icon_tx, icon_rx) = mpsc::channel();
        spawn_icon_loader(state.catalog(), resolver, icon_tx);

        Self {
            state,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            icon_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Apply all icon results that have arrived, without blocking.
    ///
    /// Returns how many icons changed state.
    pub fn poll_icon_messages(&mut self) -> usize {
        let mut changed = 0;
        while let Ok(msg) = self.icon_rx.try_recv() {
            if self.state.apply_icon_message(msg) {
                changed += 1;
            }
        }
        changed
    }

    /// Run the main application loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("starting main application loop");

        loop {
            self.poll_icon_messages();

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!(total = %self.state.quote(), "quote form closed");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        // Help overlay swallows everything except closing it
        if self.state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => self.state.toggle_help(),
                KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                    return true;
                }
                _ => {}
            }
            return false;
        }

        let scope = BindingScope::for_state(&self.state);
        match self.keybinding_context.action_for(scope, &key_event) {
            Some(action) => self.apply_action(action),
            None => {
                self.handle_unbound_key(scope, key_event);
                false
            }
        }
    }

    /// Keys with no binding: digits go to the provider field
    fn handle_unbound_key(&mut self, scope: BindingScope, key_event: KeyEvent) {
        let KeyCode::Char(c) = key_event.code else {
            return;
        };
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match scope {
            BindingScope::EditingCount if is_number_char(c) => self.state.push_count_char(c),
            BindingScope::Providers if c.is_ascii_digit() => self.state.begin_count_edit(Some(c)),
            _ => {}
        }
    }

    fn apply_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.toggle_help(),
            KeyAction::NavigateUp => self.state.cursor_up(),
            KeyAction::NavigateDown => self.state.cursor_down(),
            KeyAction::TogglePlan => {
                self.state.toggle_at_cursor();
            }
            KeyAction::NextSection => self.state.focus_next(),
            KeyAction::PreviousSection => self.state.focus_previous(),
            KeyAction::SwitchArrangement => self.state.switch_arrangement(),
            KeyAction::SelectGroup => self.state.select_arrangement(ProviderArrangement::Group),
            KeyAction::SelectSolo => self.state.select_arrangement(ProviderArrangement::Solo),
            KeyAction::Increment => self.state.increment_providers(),
            KeyAction::Decrement => self.state.decrement_providers(),
            KeyAction::EditCount => self.state.begin_count_edit(None),
            KeyAction::FinishEdit => self.state.finish_count_edit(),
            KeyAction::DeleteChar => self.state.pop_count_char(),
        }
        false
    }
}

/// Characters a number field accepts: digits, sign, decimal point, exponent
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}
