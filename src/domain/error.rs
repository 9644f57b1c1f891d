//! Error types for the zselect plugin.
//!
//! This module defines the centralized error type [`ZselectError`] and a type alias
//! [`Result`] used throughout the crate. The reducer core only produces the three
//! precondition variants; the remaining variants come from the plugin host
//! (payload decoding, theme files, configuration).

use thiserror::Error;

/// The main error type for zselect operations.
///
/// # Examples
///
/// ```
/// use zselect::ZselectError;
///
/// let err = ZselectError::DuplicateItemId("42".to_string());
/// assert_eq!(err.to_string(), "Duplicate item id: 42");
/// ```
#[derive(Debug, Error)]
pub enum ZselectError {
    /// Two candidate items share the same id.
    ///
    /// Raised when a selection screen is constructed. Item lists must be unique
    /// by id so that selection by id is unambiguous.
    #[error("Duplicate item id: {0}")]
    DuplicateItemId(String),

    /// An intent was sent to a screen that already confirmed or dismissed.
    ///
    /// This is a programming error in the caller. The controller state is left
    /// untouched when it is returned.
    #[error("Selection screen already terminated")]
    Terminated,

    /// An intent referenced an item whose id is not among the candidates.
    ///
    /// The controller state is left untouched when it is returned.
    #[error("Unknown item id: {0}")]
    UnknownItem(String),

    /// A selection request or publish payload could not be (de)serialized.
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zselect operations.
pub type Result<T> = std::result::Result<T, ZselectError>;
