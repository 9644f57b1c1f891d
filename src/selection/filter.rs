//! Case-insensitive substring filter over item titles.
//!
//! The filter is deliberately plain: both sides are lowercased and the query
//! must occur as a contiguous substring of the title. There is no fuzzy
//! scoring, no tokenization and no diacritic folding.

use super::item::SelectableItem;

/// Returns `true` if `title` contains `query`, ignoring case.
///
/// ```
/// use zselect::selection::filter::title_matches;
///
/// assert!(title_matches("Banana", "NAN"));
/// assert!(!title_matches("Banana", "bnn"));
/// ```
#[must_use]
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Returns the items whose title contains `query`, preserving input order.
///
/// Callers only invoke this with a non-empty query; an empty query is handled
/// by falling back to the full list instead of filtering.
///
/// ```
/// use zselect::domain::Choice;
/// use zselect::selection::filter::filter_items;
///
/// let items = vec![Choice::new("1", "Apple"), Choice::new("2", "Banana")];
/// assert_eq!(filter_items(&items, "an"), vec![Choice::new("2", "Banana")]);
/// ```
#[must_use]
pub fn filter_items<T: SelectableItem>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Character range of the first case-insensitive occurrence of `query` in `title`.
///
/// Returns `(start, end)` as char indices with exclusive end, or `None` when the
/// query is empty, absent, or when lowercasing changes the title's char count
/// (in which case indices would not line up with the original text).
#[must_use]
pub fn match_range(title: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let title_lower = title.to_lowercase();
    if title_lower.chars().count() != title.chars().count() {
        return None;
    }

    let query_lower = query.to_lowercase();
    let byte_start = title_lower.find(&query_lower)?;
    let start = title_lower[..byte_start].chars().count();
    Some((start, start + query_lower.chars().count()))
}
