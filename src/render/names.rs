//! Grouping of flattened attribute keys into top-level attribute names.

use std::collections::{BTreeSet, HashMap};

use crate::constants::RESOURCE_NAME_DELIMITER;

/// Top-level attribute name of a flattened key.
///
/// This is everything before the first delimiter, or the whole key when it
/// has none: `"tags.%"` → `"tags"`, `"ami"` → `"ami"`, `".x"` → `""`.
#[must_use]
pub fn attribute_name(key: &str) -> &str {
    key.split_once(RESOURCE_NAME_DELIMITER).map_or(key, |(name, _)| name)
}

/// Distinct top-level attribute names of a flattened map, ascending.
///
/// Ordering is a pure function of the key set, so two runs over the same
/// state always visit attributes in the same order regardless of the
/// map's iteration order.
#[must_use]
pub fn attribute_names_sorted(attributes: &HashMap<String, String>) -> Vec<String> {
    attributes
        .keys()
        .map(|key| attribute_name(key))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
