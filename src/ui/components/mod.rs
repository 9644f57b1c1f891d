//! Composable UI component renderers.
//!
//! Each component writes one part of the interface into the frame buffer.
//!
//! # Components
//!
//! - [`header`]: Title bar with the screen title and selection count
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`list`]: Selectable rows with checkmarks
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + List + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + List + Footer
//! - [`render_empty_mode`]: Header + optional `SearchBar` + message + Footer

mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, SearchBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_header, render_list_rows};
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}

/// Renders the normal mode layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [List Header]
/// [List Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 lines for chrome.
pub fn render_normal_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_list_header(out, current_row, theme);
    render_list_rows(out, current_row, &vm.display_items, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the search mode layout.
///
/// Same as normal mode with the 3-line search bar between the border and the
/// list header, so 9 lines of chrome.
pub fn render_search_mode(
    out: &mut String,
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, search, theme, cols);
    current_row = render_list_header(out, current_row, theme);
    render_list_rows(out, current_row, &vm.display_items, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the layout used when there are no rows to show.
///
/// The search bar stays visible so a query that matches nothing can still be
/// edited.
pub fn render_empty_mode(
    out: &mut String,
    vm: &UIViewModel,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }
    render_empty_state(out, current_row + 2, empty, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}
