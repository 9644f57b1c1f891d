//! View model types representing renderable UI state.
//!
//! View models are computed from the open selection screen by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold
//! display-ready data only: truncated titles, checkmarks, cursor position and
//! highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use zselect::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         title: "Banana".to_string(),
//!         is_checked: true,
//!         is_cursor: true,
//!         highlight_ranges: vec![(1, 3)],
//!     }],
//!     cursor_index: 0,
//!     header: HeaderInfo { title: " Select Items (1 selected) ".to_string() },
//!     footer: FooterInfo { keybindings: "Esc: cancel".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub cursor_index: usize,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Shown instead of the list when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Present while the screen is in search mode.
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for one selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Item title, truncated to the available width.
    pub title: String,

    /// Whether the item is part of the current selection (checkmark).
    pub is_checked: bool,

    /// Whether the keyboard cursor is on this row.
    pub is_cursor: bool,

    /// Char ranges of the title matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)`, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matches").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_focused: bool,
}
