//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the selection
//! controllers. It owns the presentational state of the open screen and turns
//! controller effects into side effects the runtime can execute.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Pipe / Keys → Events → Event Handler → Intents → Controller
//!                                                      ↓
//!               Side Effects ← Actions ← Event Handler ← Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`picker`]: Single/multi controller behind one intent type
//! - [`state`]: Application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use zselect::app::{handle_event, AppState, Event};
//! use zselect::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zselect::ZselectError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod picker;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use picker::{Picker, PickerIntent};
pub use state::{AppState, Screen};
