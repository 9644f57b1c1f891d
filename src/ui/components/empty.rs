//! Empty state component renderer.
//!
//! Shown instead of the list when there is nothing to list: no request yet, a
//! request without items, or a query that matches nothing.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// The message uses `empty_state_fg`, the subtitle `text_dim` with dim styling.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
}
