//! Title and status line rendering

use crate::theme::{Styles, UiText};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the form title and the status line under the form
pub struct HeaderRenderer {
    title: String,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title: UiText::TITLE.to_string(),
        }
    }

    /// Render the title section
    pub fn render_title(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_widget = Paragraph::new(self.title.as_str())
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Styles::title());
        f.render_widget(title_widget, area);
    }
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str, icons_pending: usize) {
    let mut spans = vec![Span::styled(message.to_string(), Styles::text_muted())];
    if icons_pending > 0 {
        spans.push(Span::styled(
            format!("  ({} icons loading)", icons_pending),
            Styles::nav_hint(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
