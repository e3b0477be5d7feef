//! Expansion of Terraform's flattened attribute maps.
//!
//! Legacy Terraform state stores every resource attribute as a single-level
//! map of composite keys to strings. Nested structure is encoded in the keys:
//!
//! | Flattened keys                                   | Reconstructed value        |
//! |--------------------------------------------------|----------------------------|
//! | `ami = "ami-1234"`                               | scalar                     |
//! | `ebs_optimized = "false"`                        | scalar (boolean)           |
//! | `zones.# = "2"`, `zones.0 = "a"`, `zones.1 = "b"`| list `["a", "b"]`          |
//! | `tags.% = "1"`, `tags.Name = "web"`              | map `{Name = "web"}`       |
//! | `ebs.# = "1"`, `ebs.0.size = "8"`                | list of maps               |
//!
//! Sets are flattened like lists, but with hash codes in place of ordinal
//! indices (`ingress.2541437006.from_port`). [`expand`] orders elements by
//! numeric index, which turns both forms into a stable list.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use terraconf::flatmap::{expand, Value};
//!
//! let attributes: HashMap<String, String> = [
//!     ("zones.#", "2"),
//!     ("zones.0", "us-east-1a"),
//!     ("zones.1", "us-east-1b"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! assert_eq!(
//!     expand(&attributes, "zones"),
//!     Some(Value::list(["us-east-1a", "us-east-1b"]))
//! );
//! ```

mod value;

pub use value::{Scalar, Value};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::constants::{
    COMPUTED_INDEX_PREFIX, LIST_COUNT_SUFFIX, MAP_COUNT_SUFFIX, RESOURCE_NAME_DELIMITER,
    UNKNOWN_VARIABLE_VALUE,
};

/// Reconstruct the nested value stored under `key` in a flattened map.
///
/// Resolution order:
/// 1. `key` itself is present: a scalar.
/// 2. `key.#` is present: a list (or the unknown-value sentinel, passed
///    through as a scalar when the count itself was not yet known).
/// 3. Any key starts with `key.`: a map.
///
/// Returns `None` only when nothing in `attributes` refers to `key`. The
/// input map is never modified.
#[must_use]
pub fn expand(attributes: &HashMap<String, String>, key: &str) -> Option<Value> {
    if let Some(raw) = attributes.get(key) {
        return Some(Value::Scalar(Scalar::from_state_str(raw)));
    }

    let count_key = format!("{key}{RESOURCE_NAME_DELIMITER}{LIST_COUNT_SUFFIX}");
    if let Some(count) = attributes.get(&count_key) {
        if count == UNKNOWN_VARIABLE_VALUE {
            return Some(Value::Scalar(Scalar::String(count.clone())));
        }
        return Some(Value::List(expand_list(attributes, key, count)));
    }

    let prefix = format!("{key}{RESOURCE_NAME_DELIMITER}");
    if attributes.keys().any(|k| k.starts_with(&prefix)) {
        return Some(Value::Map(expand_map(attributes, &prefix)));
    }

    None
}

fn expand_list(attributes: &HashMap<String, String>, key: &str, count: &str) -> Vec<Value> {
    match count.parse::<usize>() {
        Ok(0) => return Vec::new(),
        Ok(_) => {}
        // The count is only a hint; the indices present decide the contents.
        Err(_) => tracing::warn!("List '{}' has a non-numeric element count '{}'", key, count),
    }

    let prefix = format!("{key}{RESOURCE_NAME_DELIMITER}");
    let mut indices = BTreeSet::new();
    let mut computed = HashSet::new();

    for k in attributes.keys() {
        let Some(rest) = k.strip_prefix(&prefix) else {
            continue;
        };
        let segment = first_segment(rest);
        if segment == LIST_COUNT_SUFFIX {
            continue;
        }

        let (index_text, is_computed) = match segment.strip_prefix(COMPUTED_INDEX_PREFIX) {
            Some(stripped) => (stripped, true),
            None => (segment, false),
        };

        match index_text.parse::<u64>() {
            Ok(index) => {
                indices.insert(index);
                if is_computed {
                    computed.insert(index);
                }
            }
            Err(_) => {
                tracing::warn!("Skipping list element '{}' with a non-numeric index", k);
            }
        }
    }

    indices
        .into_iter()
        .filter_map(|index| {
            let element_key = if computed.contains(&index) {
                format!("{prefix}{COMPUTED_INDEX_PREFIX}{index}")
            } else {
                format!("{prefix}{index}")
            };
            expand(attributes, &element_key)
        })
        .collect()
}

fn expand_map(attributes: &HashMap<String, String>, prefix: &str) -> BTreeMap<String, Value> {
    // Nested maps are not required to carry a count, so only an explicit
    // zero short-circuits.
    let count_key = format!("{prefix}{MAP_COUNT_SUFFIX}");
    if attributes.get(&count_key).is_some_and(|count| count == "0") {
        return BTreeMap::new();
    }

    let mut result = BTreeMap::new();
    for k in attributes.keys() {
        let Some(rest) = k.strip_prefix(prefix) else {
            continue;
        };
        let segment = first_segment(rest);
        if segment == MAP_COUNT_SUFFIX || result.contains_key(segment) {
            continue;
        }

        let entry_key = &k[..prefix.len() + segment.len()];
        if let Some(value) = expand(attributes, entry_key) {
            result.insert(segment.to_string(), value);
        }
    }

    result
}

fn first_segment(rest: &str) -> &str {
    rest.split_once(RESOURCE_NAME_DELIMITER).map_or(rest, |(segment, _)| segment)
}
