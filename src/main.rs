//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zselect library and the Zellij plugin
//! system: it turns pipe messages and key presses into library events and
//! carries out the resulting actions through the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Pipe**: A `select` message opens a screen and blocks the CLI pipe
//! 4. **Update**: Map keys to events, delegate to the library
//! 5. **Actions**: Publish writes JSON to the pipe, Close unblocks it and hides
//!    the plugin
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move
//! - `Space`: Toggle item
//! - `Enter`: Done (when something is selected)
//! - `a`: Select / deselect all (multi selection)
//! - `/`: Search
//! - `Esc`/`q`: Cancel
//!
//! Search mode, typing:
//! - Characters edit the query, `Backspace` deletes
//! - `Down`/`Up`: Move
//! - `Enter`: Focus results
//! - `Esc`: Exit search
//!
//! Search mode, navigating results:
//! - `j`/`k`, `Space`, `Enter` as in normal mode
//! - `/`: Back to the query
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zselect::{handle_event, Action, Config, Event, InputMode, SearchFocus, SelectionRequest};

register_plugin!(State);

/// Name of the pipe messages that carry selection requests.
const SELECT_PIPE_NAME: &str = "select";

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: zselect::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zselect::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `ReadCliPipes`: Receive requests from and write selections to `zellij pipe`
    /// - `ChangeApplicationState`: Show and hide the plugin pane
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zselect::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = zselect::initialize(&config);

        request_permission(&[
            PermissionType::ReadCliPipes,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete - waiting for selection requests");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!(
            "plugin_update_event",
            otel.name = %format!("plugin_update::{event_name}"),
            event_type = %event_name
        )
        .entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("permissions denied - pipe requests cannot be answered");
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Receives selection requests.
    ///
    /// Only messages named `select` are handled. A CLI pipe stays blocked until
    /// the screen publishes or is dismissed, so `zellij pipe` returns the
    /// selection on stdout.
    fn pipe(&mut self, message: PipeMessage) -> bool {
        let _guard = tracing::debug_span!(
            "plugin_pipe",
            name = %message.name,
            source = ?message.source
        )
        .entered();

        if message.name != SELECT_PIPE_NAME {
            tracing::debug!("ignoring pipe message with unknown name");
            return false;
        }

        let pipe = match &message.source {
            PipeSource::Cli(pipe_id) => Some(pipe_id.clone()),
            PipeSource::Plugin(_) | PipeSource::Keybind => None,
        };

        let request = match SelectionRequest::from_json(message.payload.as_deref().unwrap_or("")) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "malformed selection request");
                Self::execute_action(&Action::Reject {
                    pipe,
                    reason: e.to_string(),
                });
                return false;
            }
        };

        if let Some(pipe_id) = &pipe {
            block_cli_pipe_input(pipe_id);
        }

        let should_render = self.dispatch(&Event::Open { request, pipe });
        if self.app.screen.is_some() {
            show_self(true);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zselect::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let Some(screen) = &self.app.screen else {
            if matches!(key.bare_key, BareKey::Esc | BareKey::Char('q')) {
                hide_self();
            }
            return None;
        };

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match screen.input_mode {
            InputMode::Search(SearchFocus::Typing) => match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char(' ') => Event::ToggleItem,
                BareKey::Enter => Event::Confirm,
                BareKey::Char('/') | BareKey::Backspace => Event::FocusSearchBar,
                BareKey::Esc => Event::ExitSearch,
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char(' ') => Event::ToggleItem,
                BareKey::Enter => Event::Confirm,
                BareKey::Char('a') => Event::ToggleAll,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Esc | BareKey::Char('q') => Event::Dismiss,
                _ => return None,
            },
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::Publish { pipe, payload } => {
                let Some(pipe_id) = pipe else {
                    tracing::debug!(payload = %payload, "selection confirmed without a cli pipe");
                    return;
                };
                cli_pipe_output(pipe_id, &format!("{payload}\n"));
            }
            Action::Close { pipe } => {
                if let Some(pipe_id) = pipe {
                    unblock_cli_pipe_input(pipe_id);
                }
                hide_self();
            }
            Action::Reject { pipe, reason } => {
                let Some(pipe_id) = pipe else {
                    return;
                };
                cli_pipe_output(pipe_id, &format!("error: {reason}\n"));
                unblock_cli_pipe_input(pipe_id);
            }
        }
    }
}
