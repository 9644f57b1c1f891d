//! zselect: search-filterable selection screens for Zellij.
//!
//! Another process (a script, a CLI, another plugin) sends a list of items over
//! a Zellij pipe. The plugin shows them as a single or multi selection screen
//! with a search filter, and writes the chosen item(s) back to the pipe as JSON
//! once the user confirms. Dismissing the screen writes nothing.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← pipe + keys in,
//! └─────────────────────────────────────────────────────┘    pipe output out
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← events → intents
//! │  - Event handling, cursor, input modes              │  ← effects → actions
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │ Selection (selection/)│   │ UI Layer (ui/)           │
//! │ - Single / multi     │   │ - Rendering              │
//! │ - Search filter      │   │ - Theming                │
//! │ - Reducer + effects  │   │ - Components             │
//! └──────────────────────┘   └──────────────────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Choice / SelectionRequest (domain/)              │
//! │  - Error types (domain/error)                       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! plugins {
//!     zselect location="file:/path/to/zselect.wasm" {
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Usage
//!
//! ```sh
//! zellij pipe --plugin zselect --name select -- \
//!   '{"mode":"multi","title":"Branches","items":[{"id":"main","title":"main"},{"id":"dev","title":"dev"}]}'
//! # prints [{"id":"dev","title":"dev"}] after the user picks "dev" and confirms
//! ```
//!
//! # Example
//!
//! ```rust
//! use zselect::{handle_event, initialize, Action, Config, Event, SelectionRequest};
//!
//! let mut state = initialize(&Config::default());
//! let request = SelectionRequest::from_json(
//!     r#"{"mode":"multi","items":[{"id":"1","title":"Apple"},{"id":"2","title":"Banana"}]}"#,
//! )?;
//!
//! let events = [
//!     Event::Open { request, pipe: None },
//!     Event::ToggleAll,
//! ];
//! for event in &events {
//!     handle_event(&mut state, event)?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert!(matches!(actions[0], Action::Publish { .. }));
//! # Ok::<(), zselect::ZselectError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod selection;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Choice, Result, SelectionMode, SelectionRequest, ZselectError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// zselect location="file:/path/to/zselect.wasm" {
///     theme "catppuccin-latte"
///     theme_file "~/.config/zselect/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans, e.g. `debug` or
    /// `zselect=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Reads the recognized keys; unknown keys are ignored and blank values
    /// count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zselect::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("trace_level".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the configured theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme file cannot be loaded, or
    /// [`ZselectError::Config`] if the theme name is not a built-in theme.
    pub fn load_theme(&self) -> Result<Theme> {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file));
        }

        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| ZselectError::Config(format!("Unknown theme: {name}"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Creates the idle application state: no screen open, configured theme.
///
/// A theme that fails to load is logged and replaced by the default theme.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zselect plugin");

    let theme = config.load_theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_mocha() {
        let state = initialize(&Config::default());
        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert!(state.screen.is_none());
    }

    #[test]
    fn unknown_theme_name_is_a_config_error() {
        let config = Config {
            theme_name: Some("solarized".to_string()),
            ..Config::default()
        };

        assert!(matches!(config.load_theme(), Err(ZselectError::Config(_))));
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_takes_precedence_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            trace_level: None,
        };

        assert_eq!(config.load_theme().unwrap().name, "from-file");
    }
}
