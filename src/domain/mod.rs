//! Domain layer for the zselect plugin.
//!
//! Holds the concrete types the plugin host works with, independent of the
//! Zellij API:
//!
//! - [`error`]: Error types and result aliases
//! - [`choice`]: The [`Choice`] item carried over the pipe
//! - [`request`]: The JSON request that opens a selection screen
//!
//! # Examples
//!
//! ```
//! use zselect::domain::{Choice, SelectionMode, SelectionRequest};
//!
//! let request = SelectionRequest::from_json(
//!     r#"{"mode":"multi","items":[{"id":"1","title":"Apple"}]}"#,
//! )?;
//! assert_eq!(request.mode, SelectionMode::Multi);
//! assert_eq!(request.items, vec![Choice::new("1", "Apple")]);
//! # Ok::<(), zselect::ZselectError>(())
//! ```

pub mod choice;
pub mod error;
pub mod request;

pub use choice::Choice;
pub use error::{Result, ZselectError};
pub use request::{SelectionMode, SelectionRequest};
