//! Rendering of flattened state attributes as HCL.
//!
//! - [`names`] derives the sorted top-level attribute names of a flat map
//! - [`value`] turns a reconstructed [`Value`](crate::flatmap::Value) into
//!   HCL assignments and blocks
//!
//! Both halves are pure: they never modify their inputs, and identical
//! inputs always produce byte-identical text.

pub mod names;
pub mod value;

pub use names::{attribute_name, attribute_names_sorted};
pub use value::{render_value, string_value};
