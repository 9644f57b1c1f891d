//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler turns controller [`Effect`](crate::selection::Effect)s into
//! these commands. They name the pipe the request came from, so the runtime
//! can answer the right caller.
//!
//! # Example
//!
//! ```rust
//! use zselect::app::Action;
//!
//! let actions = vec![
//!     Action::Publish { pipe: Some("select".into()), payload: "[]".into() },
//!     Action::Close { pipe: Some("select".into()) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands executed by the plugin runtime after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Writes the published selection back to the invoking flow.
    Publish {
        /// CLI pipe that opened the screen, if any.
        pipe: Option<String>,
        /// JSON-encoded selection: an object or `null` for single selection,
        /// an array for multi selection.
        payload: String,
    },

    /// Closes the selection screen: releases the pipe and hides the plugin.
    Close {
        /// CLI pipe that opened the screen, if any.
        pipe: Option<String>,
    },

    /// Refuses a request that could not be turned into a screen.
    Reject {
        /// CLI pipe that sent the request, if any.
        pipe: Option<String>,
        /// Human-readable reason, written back to the pipe.
        reason: String,
    },
}
