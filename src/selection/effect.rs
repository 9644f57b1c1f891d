//! Outbound effects produced by the selection reducers.
//!
//! Reducers never talk to the outside world. They return effects as data and
//! the driver loop (the plugin shim, or a test) decides how to carry them out.

/// A side effect requested by a selection controller.
///
/// `S` is the published selection type: `Option<T>` for single selection and
/// `Vec<T>` for multi selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<S> {
    /// Hand the final selection to the invoking flow.
    Publish(S),

    /// Close the selection screen. Fire-and-forget; nothing feeds back.
    Dismiss,
}

impl<S> Effect<S> {
    /// Returns the published selection if this is a publish effect.
    #[must_use]
    pub const fn published(&self) -> Option<&S> {
        match self {
            Self::Publish(selection) => Some(selection),
            Self::Dismiss => None,
        }
    }
}

/// Lifecycle of one selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Screen presented and accepting intents.
    #[default]
    Active,

    /// Screen confirmed or dismissed. No intent is valid any more.
    Terminated,
}
