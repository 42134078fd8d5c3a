//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the focused form
//! section. The event loop resolves keys through this registry, and the nav
//! bar and help overlay are generated from the same table.

use crate::app::{AppState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    TogglePlan,
    NextSection,
    PreviousSection,
    SwitchArrangement,
    SelectGroup,
    SelectSolo,
    Increment,
    Decrement,
    EditCount,
    FinishEdit,
    DeleteChar,
    Help,
    Quit,
}

/// Input context the bindings are looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingScope {
    Plans,
    Arrangement,
    Providers,
    /// Typing into the provider field
    EditingCount,
}

impl BindingScope {
    /// Scope for the current form state
    pub fn for_state(state: &AppState) -> Self {
        if state.is_editing_count() {
            return Self::EditingCount;
        }
        match state.focus {
            Focus::Plans => Self::Plans,
            Focus::Arrangement => Self::Arrangement,
            Focus::Providers => Self::Providers,
        }
    }

    /// Name shown in the help overlay
    pub fn label(self) -> &'static str {
        match self {
            Self::Plans => "Plans",
            Self::Arrangement => "Provider Type",
            Self::Providers => "Number of Providers",
            Self::EditingCount => "Editing Provider Count",
        }
    }

    pub const ALL: [BindingScope; 4] = [
        BindingScope::Plans,
        BindingScope::Arrangement,
        BindingScope::Providers,
        BindingScope::EditingCount,
    ];
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding. Shift is ignored so
    /// symbols like `+` and `?` match on every layout.
    fn matches(&self, event: &KeyEvent) -> bool {
        let relevant = event.modifiers.difference(KeyModifiers::SHIFT);
        self.key == event.code && self.modifiers == relevant
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Scope-specific keybindings
    scope_bindings: HashMap<BindingScope, Vec<Keybinding>>,
    /// Global keybindings (all scopes except EditingCount)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            scope_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextSection, "Tab", "Next section"),
            Keybinding::new(
                KeyCode::BackTab,
                KeyAction::PreviousSection,
                "S-Tab",
                "Previous section",
            ),
            Keybinding::new(KeyCode::Char('+'), KeyAction::Increment, "+", "Add provider"),
            Keybinding::new(KeyCode::Char('-'), KeyAction::Decrement, "-", "Remove provider"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.scope_bindings.insert(
            BindingScope::Plans,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous plan"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous plan"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next plan"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next plan"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::TogglePlan, "Space", "Toggle plan"),
                Keybinding::new(KeyCode::Enter, KeyAction::TogglePlan, "Enter", "Toggle plan"),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::Arrangement,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::SwitchArrangement, "Left", "Switch type"),
                Keybinding::new(
                    KeyCode::Right,
                    KeyAction::SwitchArrangement,
                    "Right",
                    "Switch type",
                ),
                Keybinding::new(
                    KeyCode::Char(' '),
                    KeyAction::SwitchArrangement,
                    "Space",
                    "Switch type",
                ),
                Keybinding::new(KeyCode::Char('g'), KeyAction::SelectGroup, "G", "Group"),
                Keybinding::new(KeyCode::Char('s'), KeyAction::SelectSolo, "S", "Solo"),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::Providers,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::Decrement, "Left", "Remove provider"),
                Keybinding::new(KeyCode::Right, KeyAction::Increment, "Right", "Add provider"),
                Keybinding::new(KeyCode::Down, KeyAction::Decrement, "Down", "Remove provider"),
                Keybinding::new(KeyCode::Up, KeyAction::Increment, "Up", "Add provider"),
                Keybinding::new(KeyCode::Enter, KeyAction::EditCount, "Enter", "Type a number"),
            ],
        );

        self.scope_bindings.insert(
            BindingScope::EditingCount,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::FinishEdit, "Enter", "Done"),
                Keybinding::new(KeyCode::Esc, KeyAction::FinishEdit, "Esc", "Done"),
                Keybinding::new(KeyCode::Tab, KeyAction::NextSection, "Tab", "Next section"),
                Keybinding::new(
                    KeyCode::BackTab,
                    KeyAction::PreviousSection,
                    "S-Tab",
                    "Previous section",
                ),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::with_modifiers(
                    KeyCode::Char('c'),
                    KeyModifiers::CONTROL,
                    KeyAction::Quit,
                    "Ctrl+C",
                    "Quit",
                ),
            ],
        );
    }

    /// Get keybindings for a scope (includes global bindings)
    pub fn get_bindings(&self, scope: BindingScope) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(scope_bindings) = self.scope_bindings.get(&scope) {
            bindings.extend(scope_bindings.iter());
        }

        // While typing, plain characters belong to the field
        if scope != BindingScope::EditingCount {
            bindings.extend(self.global_bindings.iter());
        }

        bindings
    }

    /// Resolve a key event to an action. Scope bindings win over globals.
    pub fn action_for(&self, scope: BindingScope, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(scope)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, scope: BindingScope) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(scope);

        let priority_actions = match scope {
            BindingScope::Plans => vec![
                KeyAction::NavigateUp,
                KeyAction::TogglePlan,
                KeyAction::NextSection,
                KeyAction::Increment,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            BindingScope::Arrangement => vec![
                KeyAction::SwitchArrangement,
                KeyAction::NextSection,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            BindingScope::Providers => vec![
                KeyAction::Decrement,
                KeyAction::Increment,
                KeyAction::EditCount,
                KeyAction::NextSection,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            BindingScope::EditingCount => vec![KeyAction::FinishEdit, KeyAction::DeleteChar],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Up/Down plan navigation collapses into one item
            if action == KeyAction::NavigateUp {
                items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                });
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a scope (for help overlay)
    pub fn get_help_content(&self, scope: BindingScope) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::NextSection
                        | KeyAction::PreviousSection
                )
            }),
            ("Form", |a| {
                matches!(
                    a,
                    KeyAction::TogglePlan
                        | KeyAction::SwitchArrangement
                        | KeyAction::SelectGroup
                        | KeyAction::SelectSolo
                        | KeyAction::Increment
                        | KeyAction::Decrement
                        | KeyAction::EditCount
                        | KeyAction::FinishEdit
                        | KeyAction::DeleteChar
                )
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(scope);
        groups
            .iter()
            .filter_map(|(title, include)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| include(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_every_scope_has_nav_items() {
        let ctx = KeybindingContext::new();
        for scope in BindingScope::ALL {
            assert!(!ctx.get_nav_items(scope).is_empty(), "{:?} has no nav items", scope);
            assert!(!ctx.get_help_content(scope).is_empty());
        }
    }

    #[test]
    fn test_scope_bindings_win_over_globals() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(BindingScope::Providers, &key(KeyCode::Up)),
            Some(KeyAction::Increment)
        );
        assert_eq!(
            ctx.action_for(BindingScope::Plans, &key(KeyCode::Up)),
            Some(KeyAction::NavigateUp)
        );
    }

    #[test]
    fn test_editing_scope_leaves_characters_alone() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.action_for(BindingScope::EditingCount, &key(KeyCode::Char('q'))), None);
        assert_eq!(ctx.action_for(BindingScope::EditingCount, &key(KeyCode::Char('-'))), None);
        assert_eq!(
            ctx.action_for(
                BindingScope::EditingCount,
                &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_editing_scope_moves_both_ways() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.action_for(BindingScope::EditingCount, &key(KeyCode::Tab)),
            Some(KeyAction::NextSection)
        );
        assert_eq!(
            ctx.action_for(
                BindingScope::EditingCount,
                &KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
            ),
            Some(KeyAction::PreviousSection)
        );
    }

    #[test]
    fn test_shift_is_ignored_for_symbols() {
        let ctx = KeybindingContext::new();
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(ctx.action_for(BindingScope::Plans, &plus), Some(KeyAction::Increment));
    }
}
