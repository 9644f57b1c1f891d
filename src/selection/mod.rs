//! Selection reducer core.
//!
//! This module holds the state machines behind the selection screens. They are
//! plain data plus a reducer: the presentation layer reads a [`Snapshot`] and
//! sends intents, the reducer updates its state and returns [`Effect`]s for the
//! driver to carry out.
//!
//! ```text
//! intent ──► Reducer::reduce ──► state'  +  [Effect::Publish(selection), Effect::Dismiss]
//!                  ▲                                     │
//!                  └──────── snapshot() ◄── renderer ◄───┘ (driver executes effects)
//! ```
//!
//! # Modules
//!
//! - [`item`]: The [`SelectableItem`] contract
//! - [`filter`]: Case-insensitive substring filter
//! - [`list`]: Candidate list with search-driven filtered view
//! - [`single`]: [`SingleSelection`] controller
//! - [`multi`]: [`MultiSelection`] controller
//! - [`reducer`]: The [`Reducer`] trait and pure [`transition`] function
//! - [`effect`]: Outbound [`Effect`]s and screen [`Phase`]
//! - [`snapshot`]: Read-only view for renderers
//!
//! # Example
//!
//! ```
//! use zselect::domain::Choice;
//! use zselect::selection::{Effect, MultiIntent, MultiSelection, Reducer};
//!
//! let apple = Choice::new("1", "Apple");
//! let banana = Choice::new("2", "Banana");
//! let mut screen = MultiSelection::new(vec![apple.clone(), banana.clone()], vec![])?;
//!
//! screen.reduce(MultiIntent::ToggleItem(apple.clone()))?;
//! screen.reduce(MultiIntent::SetSearchText("ban".into()))?;
//! screen.reduce(MultiIntent::SelectAll)?;
//!
//! let effects = screen.reduce(MultiIntent::Confirm)?;
//! assert_eq!(effects[0], Effect::Publish(vec![apple, banana]));
//! # Ok::<(), zselect::ZselectError>(())
//! ```

pub mod effect;
pub mod filter;
pub mod item;
pub mod list;
pub mod multi;
pub mod reducer;
pub mod single;
pub mod snapshot;

pub use effect::{Effect, Phase};
pub use item::SelectableItem;
pub use list::SearchableList;
pub use multi::{MultiIntent, MultiSelection};
pub use reducer::{transition, Reducer};
pub use single::{SingleIntent, SingleSelection};
pub use snapshot::{Snapshot, VisibleItem};
