//! Input mode state types for an open selection screen.
//!
//! The screen operates in one of two input modes:
//! - **Normal**: navigate, toggle, confirm and dismiss
//! - **Search**: edit the query (typing) or walk the filtered results (navigating)
//!
//! # Example
//!
//! ```rust
//! use zselect::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search field.
    ///
    /// Characters and backspace edit the query; enter moves focus to the results.
    Typing,

    /// User is navigating the filtered results.
    ///
    /// j/k move, space toggles, enter confirms and `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation mode.
    #[default]
    Normal,

    /// Search mode with focus state.
    Search(SearchFocus),
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Returns `true` while keystrokes go into the search query.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}
