//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// The hints are centered and dimmed. Text wider than the terminal is cut off
/// rather than wrapped, so the layout holds on narrow panes.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(
    out: &mut String,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, &footer.keybindings, cols);
    out.push_str(Theme::reset());
    row + 1
}
