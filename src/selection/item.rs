//! The item contract shared by both selection controllers.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can be listed, searched and picked on a selection screen.
///
/// Implementors expose a stable unique identifier and a display title. Both
/// controllers compare selections by [`id`](Self::id); the single-selection
/// toggle additionally relies on `Eq`, so two values with the same id but a
/// different title are considered different items there.
///
/// # Example
///
/// ```
/// use zselect::selection::SelectableItem;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Fruit {
///     sku: String,
///     label: String,
/// }
///
/// impl SelectableItem for Fruit {
///     fn id(&self) -> &str {
///         &self.sku
///     }
///
///     fn title(&self) -> &str {
///         &self.label
///     }
/// }
/// ```
pub trait SelectableItem: Clone + Eq + Hash + Debug {
    /// Stable identifier, unique within one item list.
    fn id(&self) -> &str;

    /// Text shown in the list and matched by the search filter.
    fn title(&self) -> &str;

    /// Returns `true` if both items carry the same id.
    fn same_id(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
