//! Candidate list with a search-driven filtered view.
//!
//! [`SearchableList`] is the piece of state both controllers share: the
//! immutable candidate list, the current query and the derived filtered view.
//! The filtered view is only recomputed for non-empty queries; clearing the
//! query leaves it stale and [`visible`](SearchableList::visible) falls back
//! to the full list instead.

use super::filter::filter_items;
use super::item::SelectableItem;
use crate::domain::{Result, ZselectError};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableList<T> {
    all_items: Vec<T>,
    filtered_items: Vec<T>,
    search_text: String,
}

impl<T: SelectableItem> SearchableList<T> {
    /// Creates a list over `items` with an empty query.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::DuplicateItemId`] if two items share an id.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(duplicate) = items.iter().find(|item| !seen.insert(item.id())) {
            return Err(ZselectError::DuplicateItemId(duplicate.id().to_string()));
        }

        Ok(Self {
            all_items: items,
            filtered_items: Vec::new(),
            search_text: String::new(),
        })
    }

    /// Updates the query, refiltering only when it is non-empty.
    pub fn set_search_text(&mut self, text: &str) {
        text.clone_into(&mut self.search_text);
        if self.search_text.is_empty() {
            return;
        }

        self.filtered_items = filter_items(&self.all_items, &self.search_text);

        tracing::debug!(
            query_len = self.search_text.len(),
            total_items = self.all_items.len(),
            filtered_count = self.filtered_items.len(),
            "search filter applied"
        );
    }

    /// Items the user currently sees.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        if self.search_text.is_empty() {
            &self.all_items
        } else {
            &self.filtered_items
        }
    }

    /// Every candidate item, unfiltered.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.all_items
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns `true` if an item with this id is among the candidates.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.all_items.iter().any(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Choice;

    fn list() -> SearchableList<Choice> {
        SearchableList::new(vec![
            Choice::new("1", "Apple"),
            Choice::new("2", "Banana"),
            Choice::new("3", "Cherry"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = SearchableList::new(vec![Choice::new("1", "Apple"), Choice::new("1", "Apricot")])
            .unwrap_err();
        assert!(matches!(err, ZselectError::DuplicateItemId(id) if id == "1"));
    }

    #[test]
    fn empty_query_shows_everything() {
        let list = list();
        assert_eq!(list.visible(), list.all());
    }

    #[test]
    fn clearing_query_falls_back_to_all_items() {
        let mut list = list();
        list.set_search_text("an");
        assert_eq!(list.visible(), &[Choice::new("2", "Banana")]);

        list.set_search_text("");
        assert_eq!(list.visible().len(), 3);
        assert_eq!(list.search_text(), "");
    }

    #[test]
    fn stale_filter_is_replaced_on_next_query() {
        let mut list = list();
        list.set_search_text("an");
        list.set_search_text("");
        list.set_search_text("err");
        assert_eq!(list.visible(), &[Choice::new("3", "Cherry")]);
    }

    #[test]
    fn no_matches_yields_empty_view() {
        let mut list = list();
        list.set_search_text("kiwi");
        assert!(list.visible().is_empty());
        assert!(list.contains_id("1"));
    }
}
