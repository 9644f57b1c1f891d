//! Selectable list component renderer.
//!
//! Each row is a checkmark column followed by the item title. The cursor row is
//! drawn with the cursor colors across the full width; other rows get search
//! match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const CHECKMARK: &str = " ✓  ";
const NO_CHECKMARK: &str = "    ";

/// Renders the column header above the list.
///
/// Returns the next available row.
pub fn render_list_header(out: &mut String, row: usize, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(NO_CHECKMARK);
    out.push_str("TITLE");
    out.push_str(Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`.
///
/// Returns the row after the last item.
pub fn render_list_rows(
    out: &mut String,
    row: usize,
    items: &[DisplayItem],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(
    out: &mut String,
    row: usize,
    item: &DisplayItem,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);

    let base = if item.is_cursor {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.cursor_fg),
            Theme::bg(&theme.colors.cursor_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    out.push_str(&base);

    if item.is_checked {
        if !item.is_cursor {
            out.push_str(&Theme::fg(&theme.colors.checkmark_fg));
        }
        out.push_str(CHECKMARK);
        out.push_str(&base);
    } else {
        out.push_str(NO_CHECKMARK);
    }

    helpers::render_highlighted_text(
        out,
        &item.title,
        &item.highlight_ranges,
        theme,
        &base,
        item.is_cursor,
    );

    let line_len = NO_CHECKMARK.chars().count() + item.title.chars().count();
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));

    out.push_str(Theme::reset());
    row + 1
}
