//! The concrete item type exchanged with host flows over the plugin pipe.

use crate::selection::SelectableItem;
use serde::{Deserialize, Serialize};

/// A selectable entry with an id and a title.
///
/// This is the wire form of an item: it is what a host pipes in as part of a
/// [`SelectionRequest`](super::SelectionRequest) and what comes back in the
/// published selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub title: String,
}

impl Choice {
    /// Creates a new choice.
    ///
    /// ```
    /// use zselect::domain::Choice;
    ///
    /// let apple = Choice::new("1", "Apple");
    /// assert_eq!(apple.id, "1");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl SelectableItem for Choice {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
