//! Application state definitions
//!
//! `AppState` holds everything the quote form shows: the injected catalog,
//! the current selection, the provider arrangement and count, and the icon
//! load states. All mutations go through methods here so the provider count
//! invariant and the catalog membership check live in one place.

use crate::catalog::{Catalog, CatalogProvider};
use crate::icons::{IconMessage, IconTracker};
use crate::money::Money;
use crate::provider_count::ProviderCount;
use crate::quote::{QuoteBreakdown, quote};
use crate::selection::SelectionSet;
use crate::types::ProviderArrangement;
use tracing::debug;

/// Form section that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// Plan list - move the cursor and toggle plans
    #[default]
    Plans,
    /// Group / Solo choice
    Arrangement,
    /// Provider count stepper
    Providers,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Plans => Self::Arrangement,
            Self::Arrangement => Self::Providers,
            Self::Providers => Self::Plans,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Plans => Self::Providers,
            Self::Arrangement => Self::Plans,
            Self::Providers => Self::Arrangement,
        }
    }

    /// Section heading shown on screen
    pub fn title(self) -> &'static str {
        match self {
            Self::Plans => "Plans",
            Self::Arrangement => "Provider Type",
            Self::Providers => "Number of Providers",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Offerings available on the form (read-only)
    catalog: Catalog,
    /// Plans the user has picked
    pub selection: SelectionSet,
    /// Group or Solo
    pub arrangement: ProviderArrangement,
    /// Provider count, never below 1
    pub providers: ProviderCount,
    /// Icon load state per offering
    pub icons: IconTracker,
    /// Section receiving key input
    pub focus: Focus,
    /// Cursor position in the plan list
    pub plan_cursor: usize,
    /// Text typed into the provider field, while it is being edited
    pub count_input: Option<String>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl AppState {
    /// Create form state for the given catalog
    pub fn new(catalog: Catalog) -> Self {
        let icons = IconTracker::new(&catalog);
        Self {
            catalog,
            selection: SelectionSet::new(),
            arrangement: ProviderArrangement::default(),
            providers: ProviderCount::default(),
            icons,
            focus: Focus::default(),
            plan_cursor: 0,
            count_input: None,
            help_visible: false,
            status_message: "Select plans with Space, Tab to move between sections".to_string(),
        }
    }

    /// Start with a different arrangement pre-selected
    pub fn with_arrangement(mut self, arrangement: ProviderArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle a plan by name. Names outside the catalog are ignored.
    ///
    /// Returns whether the plan is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if !self.catalog.contains(name) {
            debug!(offering = name, "ignoring toggle for unknown offering");
            return false;
        }
        let selected = self.selection.toggle(name);
        self.status_message = if selected {
            format!("Added {}", name)
        } else {
            format!("Removed {}", name)
        };
        debug!(offering = name, selected, "toggled offering");
        selected
    }

    /// Toggle the plan under the cursor
    pub fn toggle_at_cursor(&mut self) -> bool {
        match self.catalog.at(self.plan_cursor) {
            Some(offering) => {
                let name = offering.name.clone();
                self.toggle(&name)
            }
            None => false,
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    pub fn cursor_up(&mut self) {
        self.plan_cursor = self.plan_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.plan_cursor + 1 < self.catalog.len() {
            self.plan_cursor += 1;
        }
    }

    // -------------------------------------------------------------------------
    // Arrangement
    // -------------------------------------------------------------------------

    pub fn select_arrangement(&mut self, arrangement: ProviderArrangement) {
        if self.arrangement != arrangement {
            debug!(%arrangement, "arrangement changed");
        }
        self.arrangement = arrangement;
    }

    pub fn switch_arrangement(&mut self) {
        self.select_arrangement(self.arrangement.other());
    }

    // -------------------------------------------------------------------------
    // Provider count
    // -------------------------------------------------------------------------

    pub fn increment_providers(&mut self) {
        self.finish_count_edit();
        self.providers.increment();
    }

    pub fn decrement_providers(&mut self) {
        self.finish_count_edit();
        self.providers.decrement();
    }

    /// Set the count from raw field text, clamping to at least 1.
    /// Ends any edit in progress so the field shows the new count.
    pub fn set_providers_direct(&mut self, input: &str) {
        self.finish_count_edit();
        self.providers.set_direct(input);
    }

    /// Start editing the provider field, optionally replacing its text
    pub fn begin_count_edit(&mut self, initial: Option<char>) {
        let text = match initial {
            Some(c) => c.to_string(),
            None => self.providers.to_string(),
        };
        self.providers.set_direct(&text);
        self.count_input = Some(text);
    }

    /// Type a character into the provider field; the count follows every keystroke
    pub fn push_count_char(&mut self, c: char) {
        let text = {
            let buffer = self.count_input.get_or_insert_with(String::new);
            buffer.push(c);
            buffer.clone()
        };
        self.providers.set_direct(&text);
    }

    pub fn pop_count_char(&mut self) {
        if let Some(buffer) = self.count_input.as_mut() {
            buffer.pop();
            let text = buffer.clone();
            self.providers.set_direct(&text);
        }
    }

    /// Leave edit mode. The count already reflects the typed text.
    pub fn finish_count_edit(&mut self) {
        if self.count_input.take().is_some() {
            debug!(providers = self.providers.get(), "provider count entered");
        }
    }

    pub fn is_editing_count(&self) -> bool {
        self.count_input.is_some()
    }

    /// Text shown in the provider field
    pub fn count_field_text(&self) -> String {
        match &self.count_input {
            Some(text) => text.clone(),
            None => self.providers.to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.finish_count_edit();
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.finish_count_edit();
        self.focus = self.focus.previous();
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Current estimated cost
    pub fn quote(&self) -> Money {
        quote(&self.catalog, &self.selection, self.providers)
    }

    /// Itemised quote for the current form values
    pub fn breakdown(&self) -> QuoteBreakdown {
        QuoteBreakdown::compute(&self.catalog, &self.selection, self.providers, self.arrangement)
    }

    /// Record an icon loader result
    pub fn apply_icon_message(&mut self, msg: IconMessage) -> bool {
        self.icons.apply(msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl CatalogProvider for AppState {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
