//! Recursive rendering of reconstructed values as HCL text.
//!
//! The renderer is shape-driven: scalars become quoted assignments, maps
//! become blocks with their entries in sorted key order, and lists become
//! either a bracketed list of quoted scalars or a run of repeated blocks,
//! depending on the shape of their first element. Output is syntactically
//! valid but unindented; [`crate::format`] canonicalizes it afterwards.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use crate::flatmap::Value;
use crate::format::is_identifier;

/// Quote the textual form of a value as an HCL string literal.
///
/// Quotes and backslashes are escaped, as are newlines, carriage returns
/// and tabs; any other control character becomes a `\uXXXX` escape.
///
/// ```rust
/// use terraconf::render::string_value;
///
/// assert_eq!(string_value("test"), "\"test\"");
/// assert_eq!(string_value(true), "\"true\"");
/// assert_eq!(string_value(42), "\"42\"");
/// ```
pub fn string_value(value: impl fmt::Display) -> String {
    quote(&value.to_string())
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Attribute or block name as it must appear in HCL.
///
/// Names that are valid identifiers are emitted bare; anything else (map
/// keys such as `*`, `kubernetes.io/role` or the empty key) is quoted.
/// List elements have no name.
fn key(name: Option<&str>) -> Cow<'_, str> {
    match name {
        None => Cow::Borrowed(""),
        Some(name) if is_identifier(name) => Cow::Borrowed(name),
        Some(name) => Cow::Owned(quote(name)),
    }
}

/// Render `value` under `name`.
///
/// An empty `name` renders the bare list-element form (`"value",`) for
/// scalars. Empty lists and maps render to an empty string, as do lists
/// whose first element is itself a list.
#[must_use]
pub fn render_value(name: &str, value: &Value) -> String {
    let mut buf = String::new();
    write_value(&mut buf, Some(name).filter(|name| !name.is_empty()), value);
    buf
}

/// Append the rendering of `value` to `buf`, named unless it is a list
/// element.
pub(crate) fn write_value(buf: &mut String, name: Option<&str>, value: &Value) {
    if value.is_empty_collection() {
        return;
    }

    match value {
        Value::Scalar(scalar) => match name {
            None => {
                let _ = writeln!(buf, "{},", string_value(scalar));
            }
            Some(_) => {
                let _ = writeln!(buf, "{} = {}", key(name), string_value(scalar));
            }
        },
        Value::Map(entries) => write_map(buf, name, entries),
        Value::List(items) => write_list(buf, name, items),
    }
}

fn write_map(buf: &mut String, name: Option<&str>, entries: &BTreeMap<String, Value>) {
    let _ = writeln!(buf, "{} {{", key(name));
    for (entry_name, entry) in entries {
        write_value(buf, Some(entry_name.as_str()), entry);
    }
    buf.push_str("}\n");
}

fn write_list(buf: &mut String, name: Option<&str>, items: &[Value]) {
    match items.first() {
        None => {}
        Some(Value::Scalar(_)) => {
            let _ = writeln!(buf, "{} = [", key(name));
            for item in items {
                write_value(buf, None, item);
            }
            buf.push_str("]\n");
        }
        // A list of objects is written as one block per element.
        Some(Value::Map(_)) => {
            for item in items {
                write_value(buf, name, item);
            }
        }
        Some(Value::List(_)) => {
            tracing::debug!(
                "Skipping attribute '{}': lists of lists are not rendered",
                name.unwrap_or_default()
            );
        }
    }
}
