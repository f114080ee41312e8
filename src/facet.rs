//! Facet derivation: the distinct values of one field across a collection,
//! used to populate selectable filter option lists.

use std::collections::BTreeSet;

/// Collect the distinct values an extractor yields over a collection.
///
/// The extractor returns the owned values for one entity: zero, one, or many
/// (scalar and set-shaped fields both fit). Values are deduplicated
/// case-sensitively on the raw string and returned lexicographically sorted
/// ascending. Empty strings are dropped; they are absent data, not a
/// selectable option.
pub fn facet_values<T>(collection: &[T], extract: impl Fn(&T) -> Vec<String>) -> Vec<String> {
    let mut distinct = BTreeSet::new();
    for item in collection {
        for value in extract(item) {
            if !value.is_empty() {
                distinct.insert(value);
            }
        }
    }
    distinct.into_iter().collect()
}
