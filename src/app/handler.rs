//! Event handling and state transition logic.
//!
//! This module turns plugin events (key presses mapped by the shim, incoming
//! selection requests) into controller intents, runs them through the open
//! screen's reducer and converts the resulting effects into [`Action`]s for the
//! runtime.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Open`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Selection**: `ToggleItem`, `ToggleAll`, `Confirm`, `Dismiss`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`
//!
//! # Example
//!
//! ```rust
//! use zselect::app::{handle_event, Action, AppState, Event};
//! use zselect::domain::SelectionRequest;
//! use zselect::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let request = SelectionRequest::from_json(
//!     r#"{"mode":"single","items":[{"id":"1","title":"Apple"}]}"#,
//! )?;
//!
//! handle_event(&mut state, &Event::Open { request, pipe: Some("select".into()) })?;
//! handle_event(&mut state, &Event::ToggleItem)?;
//! let (_, actions) = handle_event(&mut state, &Event::Confirm)?;
//!
//! assert_eq!(actions, vec![
//!     Action::Publish { pipe: Some("select".into()), payload: r#"{"id":"1","title":"Apple"}"#.into() },
//!     Action::Close { pipe: Some("select".into()) },
//! ]);
//! # Ok::<(), zselect::ZselectError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use super::picker::PickerIntent;
use super::state::Screen;
use crate::app::{Action, AppState};
use crate::domain::{Result, SelectionRequest};
use crate::selection::Effect;

/// Events triggered by user input or incoming selection requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Presents a new selection screen.
    ///
    /// Any screen already open is closed first, without publishing.
    Open {
        request: SelectionRequest,
        /// CLI pipe the request arrived on.
        pipe: Option<String>,
    },
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Toggles the item under the cursor.
    ToggleItem,
    /// Multi selection: deselects everything if all items are selected,
    /// otherwise selects every visible item.
    ToggleAll,
    /// "Done". Ignored while nothing is selected.
    Confirm,
    /// Cancels the screen without publishing.
    Dismiss,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input (from navigating).
    FocusSearchBar,
    /// Focuses the filtered results (from typing).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair.
///
/// # Errors
///
/// Returns errors from the selection controller: an intent on a terminated
/// screen, or a selection that cannot be encoded as JSON.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if let Event::Open { request, pipe } = event {
        return Ok(open_screen(state, request, pipe.clone()));
    }

    let Some(screen) = state.screen.as_mut() else {
        tracing::debug!("no selection screen open, ignoring event");
        return Ok((false, vec![]));
    };

    match event {
        Event::Open { .. } => Ok((false, vec![])),
        Event::KeyDown => {
            screen.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            screen.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleItem => {
            let Some(item) = screen.cursor_item().cloned() else {
                tracing::debug!("no item under cursor");
                return Ok((false, vec![]));
            };
            dispatch(state, PickerIntent::ToggleItem(item))
        }
        Event::ToggleAll => {
            let intent = match screen.picker.is_all_selected() {
                Some(true) => PickerIntent::DeselectAll,
                Some(false) => PickerIntent::SelectAll,
                None => return Ok((false, vec![])),
            };
            dispatch(state, intent)
        }
        Event::Confirm => {
            if !screen.picker.can_confirm() {
                tracing::debug!("confirm ignored, nothing selected");
                return Ok((false, vec![]));
            }
            dispatch(state, PickerIntent::Confirm)
        }
        Event::Dismiss => dispatch(state, PickerIntent::DismissRequested),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            screen.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            screen.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if screen.picker.search_text().is_empty() {
                screen.input_mode = InputMode::Normal;
            } else {
                screen.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %screen.picker.search_text(), "exiting search mode");
            screen.input_mode = InputMode::Normal;
            dispatch(state, PickerIntent::SetSearchText(String::new()))
        }
        Event::Char(c) => {
            if !screen.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            let mut query = screen.picker.search_text().to_string();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            dispatch(state, PickerIntent::SetSearchText(query))
        }
        Event::Backspace => {
            if !screen.input_mode.is_typing() {
                return Ok((false, vec![]));
            }
            let mut query = screen.picker.search_text().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            dispatch(state, PickerIntent::SetSearchText(query))
        }
    }
}

fn open_screen(
    state: &mut AppState,
    request: &SelectionRequest,
    pipe: Option<String>,
) -> (bool, Vec<Action>) {
    let mut actions = vec![];

    if let Some(previous) = state.screen.take() {
        tracing::debug!(pipe = ?previous.pipe, "replacing open selection screen");
        actions.push(Action::Close {
            pipe: previous.pipe,
        });
    }

    match Screen::open(request, pipe.clone()) {
        Ok(screen) => {
            tracing::debug!(
                mode = ?request.mode,
                item_count = request.items.len(),
                preselected = request.selected.len(),
                "selection screen opened"
            );
            state.screen = Some(screen);
            (true, actions)
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejecting selection request");
            actions.push(Action::Reject {
                pipe,
                reason: e.to_string(),
            });
            (true, actions)
        }
    }
}

/// Runs an intent through the open screen and converts effects to actions.
///
/// A dismiss effect discards the screen.
fn dispatch(state: &mut AppState, intent: PickerIntent) -> Result<(bool, Vec<Action>)> {
    let Some(screen) = state.screen.as_mut() else {
        return Ok((false, vec![]));
    };

    let effects = screen.picker.dispatch(intent)?;
    screen.clamp_cursor();

    let pipe = screen.pipe.clone();
    let mut actions = Vec::with_capacity(effects.len());

    for effect in effects {
        match effect {
            Effect::Publish(selection) => {
                actions.push(Action::Publish {
                    pipe: pipe.clone(),
                    payload: selection.to_string(),
                });
            }
            Effect::Dismiss => {
                tracing::debug!(pipe = ?pipe, "closing selection screen");
                state.screen = None;
                actions.push(Action::Close { pipe: pipe.clone() });
            }
        }
    }

    Ok((true, actions))
}
