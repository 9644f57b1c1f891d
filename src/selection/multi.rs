//! Multi selection controller: pick any subset, with bulk select/deselect.
//!
//! Note the scoping of the bulk operations. [`MultiIntent::SelectAll`] adds the
//! *visible* items (the filtered view while searching) to the selection, while
//! [`MultiSelection::is_all_selected`] compares against the *full* candidate
//! list. After a filtered select-all the screen therefore still reports that
//! not everything is selected.

use super::effect::{Effect, Phase};
use super::item::SelectableItem;
use super::list::SearchableList;
use super::reducer::Reducer;
use super::snapshot::{Snapshot, VisibleItem};
use crate::domain::{Result, ZselectError};
use std::collections::HashSet;

/// Intents accepted by [`MultiSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiIntent<T> {
    /// Replace the search query.
    SetSearchText(String),
    /// Add the item, or remove it if already selected (by id).
    ///
    /// Items not in the candidate list are rejected.
    ToggleItem(T),
    /// Add every visible item to the selection.
    SelectAll,
    /// Clear the whole selection, regardless of the current search.
    DeselectAll,
    /// "Done": publish the selection and dismiss.
    Confirm,
    /// Cancel: dismiss without publishing.
    DismissRequested,
}

/// State of one multi-selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelection<T> {
    list: SearchableList<T>,
    /// Unique by id, in selection order.
    selected_items: Vec<T>,
    phase: Phase,
}

impl<T: SelectableItem> MultiSelection<T> {
    /// Creates the screen state with pre-existing selections.
    ///
    /// Pre-selected items that are not candidates are dropped, and repeated ids
    /// keep only their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::DuplicateItemId`] if `items` is not unique by id.
    pub fn new(items: Vec<T>, selected_items: Vec<T>) -> Result<Self> {
        let list = SearchableList::new(items)?;

        let requested = selected_items.len();
        let mut seen = HashSet::new();
        let selected_items: Vec<T> = selected_items
            .into_iter()
            .filter(|item| list.contains_id(item.id()) && seen.insert(item.id().to_string()))
            .collect();

        if selected_items.len() != requested {
            tracing::debug!(
                requested,
                kept = selected_items.len(),
                "dropped pre-selections not in item list"
            );
        }

        Ok(Self {
            list,
            selected_items,
            phase: Phase::Active,
        })
    }

    #[must_use]
    pub fn selected_items(&self) -> &[T] {
        &self.selected_items
    }

    #[must_use]
    pub fn is_item_selected(&self, item: &T) -> bool {
        self.selected_items.iter().any(|selected| selected.same_id(item))
    }

    /// Returns `true` iff the selection covers the full candidate list by id.
    ///
    /// The comparison ignores the current search.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        let all = self.list.all();
        self.selected_items.len() == all.len()
            && all.iter().all(|item| self.is_item_selected(item))
    }

    #[must_use]
    pub fn visible_items(&self) -> &[T] {
        self.list.visible()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        self.list.search_text()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// "Done" is only offered once at least one item is selected.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        !self.selected_items.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot {
            items: self
                .list
                .visible()
                .iter()
                .map(|item| VisibleItem {
                    item,
                    is_selected: self.is_item_selected(item),
                })
                .collect(),
            search_text: self.list.search_text(),
            confirm_enabled: self.can_confirm(),
            selected_count: self.selected_items.len(),
            all_selected: Some(self.is_all_selected()),
        }
    }

    fn toggle_item(&mut self, item: T) -> Result<()> {
        if !self.list.contains_id(item.id()) {
            tracing::warn!(item_id = %item.id(), "toggle for item not in list");
            return Err(ZselectError::UnknownItem(item.id().to_string()));
        }
        if let Some(position) = self.selected_items.iter().position(|s| s.same_id(&item)) {
            tracing::debug!(item_id = %item.id(), "item deselected");
            self.selected_items.remove(position);
        } else {
            tracing::debug!(item_id = %item.id(), "item selected");
            self.selected_items.push(item);
        }
        Ok(())
    }

    fn select_all(&mut self) {
        let missing: Vec<T> = self
            .list
            .visible()
            .iter()
            .filter(|item| !self.is_item_selected(item))
            .cloned()
            .collect();
        self.selected_items.extend(missing);
        tracing::debug!(
            selected_count = self.selected_items.len(),
            filtered = !self.list.search_text().is_empty(),
            "selected all visible items"
        );
    }
}

impl<T: SelectableItem> Reducer for MultiSelection<T> {
    type Intent = MultiIntent<T>;
    type Output = Vec<T>;

    fn reduce(&mut self, intent: MultiIntent<T>) -> Result<Vec<Effect<Vec<T>>>> {
        let _span = tracing::debug_span!("multi_selection_reduce", intent = ?intent).entered();

        if self.phase == Phase::Terminated {
            tracing::warn!("intent received after screen terminated");
            return Err(ZselectError::Terminated);
        }

        match intent {
            MultiIntent::SetSearchText(text) => {
                self.list.set_search_text(&text);
                Ok(vec![])
            }
            MultiIntent::ToggleItem(item) => {
                self.toggle_item(item)?;
                Ok(vec![])
            }
            MultiIntent::SelectAll => {
                self.select_all();
                Ok(vec![])
            }
            MultiIntent::DeselectAll => {
                self.selected_items.clear();
                Ok(vec![])
            }
            MultiIntent::Confirm => {
                self.phase = Phase::Terminated;
                tracing::debug!(
                    selected_count = self.selected_items.len(),
                    "publishing multi selection"
                );
                Ok(vec![
                    Effect::Publish(self.selected_items.clone()),
                    Effect::Dismiss,
                ])
            }
            MultiIntent::DismissRequested => {
                self.phase = Phase::Terminated;
                tracing::debug!("multi selection dismissed");
                Ok(vec![Effect::Dismiss])
            }
        }
    }

    fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Choice;

    fn a() -> Choice {
        Choice::new("a", "Alpha")
    }

    fn b() -> Choice {
        Choice::new("b", "Beta")
    }

    fn c() -> Choice {
        Choice::new("c", "Gamma")
    }

    fn screen() -> MultiSelection<Choice> {
        MultiSelection::new(vec![a(), b(), c()], vec![]).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = screen();
        state.reduce(MultiIntent::ToggleItem(b())).unwrap();
        assert_eq!(state.selected_items(), &[b()]);

        state.reduce(MultiIntent::ToggleItem(b())).unwrap();
        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn toggle_matches_by_id() {
        let mut state = MultiSelection::new(vec![a(), b()], vec![a()]).unwrap();
        state.reduce(MultiIntent::ToggleItem(Choice::new("a", "Renamed"))).unwrap();
        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn double_toggle_is_identity_for_unselected_items() {
        let mut state = MultiSelection::new(vec![a(), b(), c()], vec![c(), a()]).unwrap();
        let before = state.selected_items().to_vec();

        state.reduce(MultiIntent::ToggleItem(b())).unwrap();
        state.reduce(MultiIntent::ToggleItem(b())).unwrap();

        assert_eq!(state.selected_items(), before.as_slice());
    }

    #[test]
    fn selection_preserves_insertion_order() {
        let mut state = screen();
        for item in [c(), a(), b()] {
            state.reduce(MultiIntent::ToggleItem(item)).unwrap();
        }
        let ids: Vec<&str> = state.selected_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn select_all_without_search_selects_everything() {
        let mut state = screen();
        state.reduce(MultiIntent::SelectAll).unwrap();

        assert_eq!(state.selected_items(), &[a(), b(), c()]);
        assert!(state.is_all_selected());
    }

    #[test]
    fn filtered_select_all_is_scoped_to_visible_items() {
        let mut state = screen();
        state.reduce(MultiIntent::SetSearchText("ALPHA".into())).unwrap();
        state.reduce(MultiIntent::SelectAll).unwrap();

        assert_eq!(state.selected_items(), &[a()]);
        assert!(!state.is_all_selected());
    }

    #[test]
    fn filtered_select_all_keeps_earlier_selections() {
        let mut state = screen();
        state.reduce(MultiIntent::ToggleItem(b())).unwrap();
        state.reduce(MultiIntent::SetSearchText("mm".into())).unwrap();
        state.reduce(MultiIntent::SelectAll).unwrap();

        assert_eq!(state.selected_items(), &[b(), c()]);
        assert!(!state.is_all_selected());
    }

    #[test]
    fn select_all_does_not_duplicate_selected_items() {
        let mut state = screen();
        state.reduce(MultiIntent::ToggleItem(c())).unwrap();
        state.reduce(MultiIntent::SelectAll).unwrap();

        assert_eq!(state.selected_items(), &[c(), a(), b()]);
        assert!(state.is_all_selected());
    }

    #[test]
    fn deselect_all_ignores_search_scope() {
        let mut state = screen();
        state.reduce(MultiIntent::SelectAll).unwrap();
        state.reduce(MultiIntent::SetSearchText("beta".into())).unwrap();
        state.reduce(MultiIntent::DeselectAll).unwrap();

        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn all_selected_is_order_insensitive() {
        let state = MultiSelection::new(vec![a(), b(), c()], vec![c(), b(), a()]).unwrap();
        assert!(state.is_all_selected());
    }

    #[test]
    fn preselection_is_deduplicated_and_restricted_to_items() {
        let stranger = Choice::new("z", "Zeta");
        let state =
            MultiSelection::new(vec![a(), b()], vec![b(), stranger, Choice::new("b", "Beta")])
                .unwrap();
        assert_eq!(state.selected_items(), &[b()]);
    }

    #[test]
    fn confirm_publishes_possibly_empty_selection() {
        let mut state = screen();
        let effects = state.reduce(MultiIntent::Confirm).unwrap();
        assert_eq!(effects, vec![Effect::Publish(vec![]), Effect::Dismiss]);
    }

    #[test]
    fn dismiss_emits_single_dismiss() {
        let mut state = screen();
        state.reduce(MultiIntent::SelectAll).unwrap();
        let effects = state.reduce(MultiIntent::DismissRequested).unwrap();

        assert_eq!(effects, vec![Effect::Dismiss]);
        assert!(effects.iter().all(|e| e.published().is_none()));
    }

    #[test]
    fn terminated_screen_rejects_intents() {
        let mut state = screen();
        state.reduce(MultiIntent::Confirm).unwrap();

        assert!(matches!(
            state.reduce(MultiIntent::SelectAll),
            Err(ZselectError::Terminated)
        ));
        assert!(state.selected_items().is_empty());
    }

    #[test]
    fn snapshot_reports_bulk_state() {
        let mut state = screen();
        state.reduce(MultiIntent::ToggleItem(a())).unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.items.len(), 3);
        assert!(snapshot.items[0].is_selected);
        assert!(!snapshot.items[1].is_selected);
        assert!(snapshot.confirm_enabled);
        assert_eq!(snapshot.all_selected, Some(false));
    }

    #[test]
    fn toggling_unknown_item_fails_without_mutation() {
        let mut state = screen();
        state.reduce(MultiIntent::SelectAll).unwrap();
        let before = state.clone();

        let err = state
            .reduce(MultiIntent::ToggleItem(Choice::new("z", "Zeta")))
            .unwrap_err();

        assert!(matches!(err, ZselectError::UnknownItem(id) if id == "z"));
        assert_eq!(state, before);
        assert!(state.is_all_selected());
    }
}
