//! Single selection controller: pick zero or one item.

use super::effect::{Effect, Phase};
use super::item::SelectableItem;
use super::list::SearchableList;
use super::reducer::Reducer;
use super::snapshot::{Snapshot, VisibleItem};
use crate::domain::{Result, ZselectError};

/// Intents accepted by [`SingleSelection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleIntent<T> {
    /// Replace the search query.
    SetSearchText(String),
    /// Select the item, or clear the selection if it is already selected.
    ///
    /// Items not in the candidate list are rejected.
    ToggleItem(T),
    /// "Done": publish the selection and dismiss.
    Confirm,
    /// Cancel: dismiss without publishing.
    DismissRequested,
}

/// State of one single-selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelection<T> {
    list: SearchableList<T>,
    selected_item: Option<T>,
    phase: Phase,
}

impl<T: SelectableItem> SingleSelection<T> {
    /// Creates the screen state with an optional pre-existing selection.
    ///
    /// A pre-selection that is not one of `items` (by id) is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::DuplicateItemId`] if `items` is not unique by id.
    pub fn new(items: Vec<T>, selected_item: Option<T>) -> Result<Self> {
        let list = SearchableList::new(items)?;
        let selected_item = selected_item.filter(|item| {
            let known = list.contains_id(item.id());
            if !known {
                tracing::debug!(item_id = %item.id(), "dropping pre-selection not in item list");
            }
            known
        });

        Ok(Self {
            list,
            selected_item,
            phase: Phase::Active,
        })
    }

    #[must_use]
    pub const fn selected_item(&self) -> Option<&T> {
        self.selected_item.as_ref()
    }

    #[must_use]
    pub fn is_item_selected(&self, item: &T) -> bool {
        self.selected_item
            .as_ref()
            .is_some_and(|selected| selected.same_id(item))
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

    /// "Done" is only offered once something is selected.
    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.selected_item.is_some()
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
            selected_count: usize::from(self.selected_item.is_some()),
            all_selected: None,
        }
    }

    fn toggle_item(&mut self, item: T) -> Result<()> {
        if !self.list.contains_id(item.id()) {
            tracing::warn!(item_id = %item.id(), "toggle for item not in list");
            return Err(ZselectError::UnknownItem(item.id().to_string()));
        }
        if self.selected_item.as_ref() == Some(&item) {
            tracing::debug!(item_id = %item.id(), "clearing selection");
            self.selected_item = None;
        } else {
            tracing::debug!(item_id = %item.id(), "item selected");
            self.selected_item = Some(item);
        }
        Ok(())
    }
}

impl<T: SelectableItem> Reducer for SingleSelection<T> {
    type Intent = SingleIntent<T>;
    type Output = Option<T>;

    fn reduce(&mut self, intent: SingleIntent<T>) -> Result<Vec<Effect<Option<T>>>> {
        let _span = tracing::debug_span!("single_selection_reduce", intent = ?intent).entered();

        if self.phase == Phase::Terminated {
            tracing::warn!("intent received after screen terminated");
            return Err(ZselectError::Terminated);
        }

        match intent {
            SingleIntent::SetSearchText(text) => {
                self.list.set_search_text(&text);
                Ok(vec![])
            }
            SingleIntent::ToggleItem(item) => {
                self.toggle_item(item)?;
                Ok(vec![])
            }
            SingleIntent::Confirm => {
                self.phase = Phase::Terminated;
                tracing::debug!(
                    selected = ?self.selected_item.as_ref().map(SelectableItem::id),
                    "publishing single selection"
                );
                Ok(vec![
                    Effect::Publish(self.selected_item.clone()),
                    Effect::Dismiss,
                ])
            }
            SingleIntent::DismissRequested => {
                self.phase = Phase::Terminated;
                tracing::debug!("single selection dismissed");
                Ok(vec![Effect::Dismiss])
            }
        }
    }

    fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }
}
