//! Plan list rendering
//!
//! One row per offering: selection marker, icon cell, name, and price. The
//! icon cell shows a placeholder until the icon has loaded.

use crate::app::{AppState, Focus};
use crate::catalog::{CatalogProvider, Offering};
use crate::icons::{IconImage, IconLoadState};
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Width of the icon cell, wide enough for the placeholder text
const ICON_CELL_WIDTH: usize = 10;

/// Text for an icon cell
pub fn icon_cell_text(state: IconLoadState, image: Option<&IconImage>) -> String {
    let text = match (state, image) {
        (IconLoadState::Loaded, Some(image)) => format!("[{}]", image.badge),
        // Failed icons keep the placeholder
        _ => UiText::LOADING.to_string(),
    };
    format!("{:<width$}", text, width = ICON_CELL_WIDTH)
}

fn plan_row(state: &AppState, offering: &Offering) -> ListItem<'static> {
    let selected = state.is_selected(&offering.name);
    let icon_state = state.icons.state(&offering.name);

    let marker = if selected { "[x] " } else { "[ ] " };
    let name_style = if selected { Styles::picked() } else { Styles::text() };

    ListItem::new(Line::from(vec![
        Span::styled(marker, name_style),
        Span::styled(
            icon_cell_text(icon_state, state.icons.image(&offering.name)),
            Theme::icon_style(icon_state),
        ),
        Span::styled(format!(" {:<14}", offering.name), name_style),
        Span::styled(offering.unit_cost.to_string(), Styles::price()),
    ]))
}

/// Render the plan list with the cursor highlighted when focused
pub fn render_plans(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Plans;
    let items: Vec<ListItem> = state
        .catalog()
        .iter()
        .map(|offering| plan_row(state, offering))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({} selected) ", Focus::Plans.title(), state.selection.len()))
                .border_style(Theme::section_border(focused)),
        )
        .highlight_style(Styles::cursor());

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.plan_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_cell_placeholder_until_loaded() {
        assert!(icon_cell_text(IconLoadState::Pending, None).starts_with("Loading..."));
        assert!(icon_cell_text(IconLoadState::Failed, None).starts_with("Loading..."));

        let image = IconImage {
            badge: "AE".to_string(),
            bytes: 0,
        };
        assert!(icon_cell_text(IconLoadState::Loaded, Some(&image)).starts_with("[AE]"));
        assert_eq!(icon_cell_text(IconLoadState::Loaded, Some(&image)).len(), ICON_CELL_WIDTH);
    }
}
