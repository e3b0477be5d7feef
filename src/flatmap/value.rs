//! Reconstructed value tree produced by the flatmap expander.

use std::collections::BTreeMap;
use std::fmt;

/// A scalar leaf of a reconstructed value.
///
/// All scalar kinds render identically in generated configuration: their
/// textual form, quoted. The distinction is kept so that callers building
/// values by hand (and the expander, which recognizes `"true"`/`"false"`)
/// don't have to stringify up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// Plain text
    String(String),
    /// Boolean, from the state strings `"true"` and `"false"`
    Bool(bool),
    /// Integer
    Int(i64),
}

impl Scalar {
    /// Interpret a raw state attribute value.
    ///
    /// Terraform flattens booleans to `"true"`/`"false"`; everything else
    /// stays text (numbers included, since the state does not record
    /// whether `"42"` was a number or a string).
    #[must_use]
    pub fn from_state_str(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::String(other.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// A value reconstructed from a flattened attribute map.
///
/// Maps are kept in a [`BTreeMap`] so iteration is always in ascending key
/// order, which is what makes generated configuration reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Single scalar value
    Scalar(Scalar),
    /// Order-significant sequence
    List(Vec<Value>),
    /// Keyed map, iterated in sorted key order
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Build a [`Value::List`] from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Map`] from key/value pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Returns `true` for empty lists and maps.
    #[must_use]
    pub fn is_empty_collection(&self) -> bool {
        match self {
            Self::Scalar(_) => false,
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Map(entries)
    }
}
