//! Centralized theme and styling for the TUI
//!
//! A single source of truth for the colors, styles, and text used by the
//! quote form. Rendering code asks for a semantic style here instead of
//! building one inline.
//!
//! # Usage
//! ```rust
//! use coverage_quote::theme::{Colors, Styles, Theme};
//! use coverage_quote::icons::IconLoadState;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let icon_style = Theme::icon_style(IconLoadState::Pending);
//! ```

use crate::icons::IconLoadState;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Help overlay background
    pub const BG_OVERLAY: Color = Color::Rgb(20, 20, 30);

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for the cursor row
    pub const SECONDARY: Color = Color::Yellow;

    /// Estimated cost line
    pub const TOTAL: Color = Color::LightBlue;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Loaded icon badge
    pub const SUCCESS: Color = Color::Green;

    /// Failed icon placeholder
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Border of the focused section
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Border of the other sections
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected plan marker
    pub const PICKED: Color = Color::LightBlue;

    /// Cursor highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Cursor text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Plan prices
    pub fn price() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Row under the cursor
    pub fn cursor() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Plan the user has picked
    pub fn picked() -> Style {
        Style::default()
            .fg(Colors::PICKED)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/selected button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive button
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Numeric field while it is being edited
    pub fn editing() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    /// Estimated cost line
    pub fn total() -> Style {
        Style::default()
            .fg(Colors::TOTAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    /// Border style for a form section
    pub fn section_border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }

    /// Style for a plan's icon cell
    pub fn icon_style(state: IconLoadState) -> Style {
        match state {
            IconLoadState::Pending => Style::default().fg(Colors::FG_MUTED),
            IconLoadState::Loaded => Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
            IconLoadState::Failed => Style::default().fg(Colors::ERROR),
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Title block height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Arrangement and stepper rows (with borders)
    pub const CONTROL_HEIGHT: u16 = 3;

    /// Estimated cost block height
    pub const TOTAL_HEIGHT: u16 = 3;

    /// Help overlay size as a share of the screen
    pub const HELP_WIDTH_PCT: u16 = 60;
    pub const HELP_HEIGHT_PCT: u16 = 70;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const TITLE: &'static str = "Welcome to Our Service";
    pub const LOADING: &'static str = "Loading...";
    pub const COST_LABEL: &'static str = "Estimated Cost: ";
    pub const HELP_FOOTER: &'static str = "Press ? or Esc to close";
}
