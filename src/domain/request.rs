//! Selection request payload sent by host flows.
//!
//! A host opens a selection screen by piping a JSON document to the plugin:
//!
//! ```json
//! {
//!   "mode": "multi",
//!   "title": "Pick reviewers",
//!   "items": [{"id": "1", "title": "Apple"}, {"id": "2", "title": "Banana"}],
//!   "selected": ["1"]
//! }
//! ```
//!
//! `title` and `selected` are optional.

use super::choice::Choice;
use super::error::Result;
use serde::{Deserialize, Serialize};

/// Which controller a request opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Pick at most one item.
    Single,
    /// Pick any subset of items.
    Multi,
}

impl SelectionMode {
    /// Title used when the request does not provide one.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Single => "Select Item",
            Self::Multi => "Select Items",
        }
    }
}

/// Request to present a selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Single or multi selection.
    pub mode: SelectionMode,

    /// Optional screen title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Candidate items in display order. Must be unique by id.
    pub items: Vec<Choice>,

    /// Ids of items selected when the screen opens.
    ///
    /// For single selection only the first id is used.
    #[serde(default)]
    pub selected: Vec<String>,
}

impl SelectionRequest {
    /// Parses a request from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::Payload`](super::ZselectError::Payload) if the
    /// document is not valid JSON or does not match the request shape.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Title to display, falling back to the mode default.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.mode.default_title())
    }

    /// Resolves `selected` ids against `items`, in the order given.
    ///
    /// Unknown ids are skipped.
    #[must_use]
    pub fn preselected(&self) -> Vec<Choice> {
        self.selected
            .iter()
            .filter_map(|id| self.items.iter().find(|item| &item.id == id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZselectError;

    #[test]
    fn parses_minimal_single_request() {
        let request =
            SelectionRequest::from_json(r#"{"mode":"single","items":[]}"#).unwrap();

        assert_eq!(request.mode, SelectionMode::Single);
        assert!(request.items.is_empty());
        assert!(request.selected.is_empty());
        assert_eq!(request.display_title(), "Select Item");
    }

    #[test]
    fn custom_title_wins_over_default() {
        let request = SelectionRequest::from_json(
            r#"{"mode":"multi","title":"Reviewers","items":[]}"#,
        )
        .unwrap();

        assert_eq!(request.display_title(), "Reviewers");
    }

    #[test]
    fn preselected_skips_unknown_ids() {
        let request = SelectionRequest::from_json(
            r#"{
                "mode": "multi",
                "items": [{"id":"1","title":"Apple"},{"id":"2","title":"Banana"}],
                "selected": ["2", "9", "1"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            request.preselected(),
            vec![Choice::new("2", "Banana"), Choice::new("1", "Apple")]
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = SelectionRequest::from_json(r#"{"mode":"many","items":[]}"#).unwrap_err();
        assert!(matches!(err, ZselectError::Payload(_)));
    }
}
