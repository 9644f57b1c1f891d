//! Mode-erased wrapper around the two selection controllers.
//!
//! The plugin host opens either kind of screen from a
//! [`SelectionRequest`]. [`Picker`] lets the event handler drive both through one
//! intent type and receive published selections already encoded as JSON.

use crate::domain::{Choice, Result, SelectionMode, SelectionRequest};
use crate::selection::{
    Effect, MultiIntent, MultiSelection, Reducer, SingleIntent, SingleSelection, Snapshot,
};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Intents the host can send to either controller.
///
/// `SelectAll` and `DeselectAll` only apply to multi selection and are ignored
/// by single selection screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerIntent {
    SetSearchText(String),
    ToggleItem(Choice),
    SelectAll,
    DeselectAll,
    Confirm,
    DismissRequested,
}

/// An open selection controller of either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picker {
    Single(SingleSelection<Choice>),
    Multi(MultiSelection<Choice>),
}

impl Picker {
    /// Builds the controller described by a request.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::DuplicateItemId`](crate::ZselectError::DuplicateItemId)
    /// if the request items are not unique by id.
    pub fn from_request(request: &SelectionRequest) -> Result<Self> {
        let preselected = request.preselected();
        match request.mode {
            SelectionMode::Single => Ok(Self::Single(SingleSelection::new(
                request.items.clone(),
                preselected.into_iter().next(),
            )?)),
            SelectionMode::Multi => Ok(Self::Multi(MultiSelection::new(
                request.items.clone(),
                preselected,
            )?)),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_, Choice> {
        match self {
            Self::Single(state) => state.snapshot(),
            Self::Multi(state) => state.snapshot(),
        }
    }

    #[must_use]
    pub fn visible_items(&self) -> &[Choice] {
        match self {
            Self::Single(state) => state.visible_items(),
            Self::Multi(state) => state.visible_items(),
        }
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        match self {
            Self::Single(state) => state.search_text(),
            Self::Multi(state) => state.search_text(),
        }
    }

    #[must_use]
    pub fn can_confirm(&self) -> bool {
        match self {
            Self::Single(state) => state.can_confirm(),
            Self::Multi(state) => state.can_confirm(),
        }
    }

    /// Multi selection: whether every candidate is selected. `None` for single.
    #[must_use]
    pub fn is_all_selected(&self) -> Option<bool> {
        match self {
            Self::Single(_) => None,
            Self::Multi(state) => Some(state.is_all_selected()),
        }
    }

    /// Forwards an intent to the underlying controller.
    ///
    /// Published selections are returned as JSON values.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::Terminated`](crate::ZselectError::Terminated) if
    /// the screen already terminated, or a payload error if the selection cannot
    /// be encoded.
    pub fn dispatch(&mut self, intent: PickerIntent) -> Result<Vec<Effect<JsonValue>>> {
        match self {
            Self::Single(state) => {
                let intent = match intent {
                    PickerIntent::SetSearchText(text) => SingleIntent::SetSearchText(text),
                    PickerIntent::ToggleItem(item) => SingleIntent::ToggleItem(item),
                    PickerIntent::Confirm => SingleIntent::Confirm,
                    PickerIntent::DismissRequested => SingleIntent::DismissRequested,
                    PickerIntent::SelectAll | PickerIntent::DeselectAll => {
                        tracing::debug!("bulk intent ignored by single selection");
                        return Ok(vec![]);
                    }
                };
                encode(state.reduce(intent)?)
            }
            Self::Multi(state) => {
                let intent = match intent {
                    PickerIntent::SetSearchText(text) => MultiIntent::SetSearchText(text),
                    PickerIntent::ToggleItem(item) => MultiIntent::ToggleItem(item),
                    PickerIntent::SelectAll => MultiIntent::SelectAll,
                    PickerIntent::DeselectAll => MultiIntent::DeselectAll,
                    PickerIntent::Confirm => MultiIntent::Confirm,
                    PickerIntent::DismissRequested => MultiIntent::DismissRequested,
                };
                encode(state.reduce(intent)?)
            }
        }
    }
}

fn encode<S: Serialize>(effects: Vec<Effect<S>>) -> Result<Vec<Effect<JsonValue>>> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::Publish(selection) => Ok(Effect::Publish(serde_json::to_value(selection)?)),
            Effect::Dismiss => Ok(Effect::Dismiss),
        })
        .collect()
}
