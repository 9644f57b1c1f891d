//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ..._│ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// While the query has focus the frame uses `search_bar_border` and a `_`
/// caret follows the text. Once focus moves to the results the frame falls
/// back to the plain border color.
pub fn render_search_bar(
    out: &mut String,
    row: usize,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&frame);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    let caret = if search.is_focused { "_" } else { "" };
    let search_text: String = format!(" Search: {}{caret}", search.query)
        .chars()
        .take(inner_width)
        .collect();
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&frame);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&search_text);
    out.push_str(&" ".repeat(padding));
    out.push_str(&frame);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&frame);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_bar_shows_caret() {
        let theme = Theme::default();
        let mut out = String::new();
        let search = SearchBarInfo {
            query: "ban".to_string(),
            is_focused: true,
        };

        let next = render_search_bar(&mut out, 4, &search, &theme, 40);

        assert_eq!(next, 7);
        assert!(out.contains(" Search: ban_"));
    }

    #[test]
    fn unfocused_bar_has_no_caret() {
        let theme = Theme::default();
        let mut out = String::new();
        let search = SearchBarInfo {
            query: "ban".to_string(),
            is_focused: false,
        };

        render_search_bar(&mut out, 4, &search, &theme, 40);

        assert!(out.contains(" Search: ban "));
        assert!(!out.contains("ban_"));
    }
}
