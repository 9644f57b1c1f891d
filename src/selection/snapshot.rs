//! Read-only view of a controller handed to the presentation layer.

/// One row of the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem<'a, T> {
    pub item: &'a T,
    pub is_selected: bool,
}

/// Everything a renderer needs to draw a selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a, T> {
    /// Visible rows in display order.
    pub items: Vec<VisibleItem<'a, T>>,

    /// Current search query.
    pub search_text: &'a str,

    /// Whether the "Done" action is available.
    pub confirm_enabled: bool,

    /// Number of selected items across the whole list, not just visible rows.
    pub selected_count: usize,

    /// Multi selection only: whether every candidate is selected.
    ///
    /// Drives the bulk toggle label. `None` for single selection.
    pub all_selected: Option<bool>,
}
