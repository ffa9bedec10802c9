//! Typed access to parser result trees.
//!
//! The command/parse collaborator hands back a nested key-value tree per
//! command. Normalizers never index into that tree directly; they wrap each
//! mapping in an [`Entry`] and pull fields through [`Entry::required`] and
//! [`Entry::optional`], which centralizes the `n/a` convention for absent
//! optional fields.

use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{ExtractError, Result};

/// Placeholder rendered for every optional field absent from the source tree.
pub const NOT_APPLICABLE: &str = "n/a";

/// An optional record field.
///
/// Serializes as the inner value, or as [`NOT_APPLICABLE`] when absent, so
/// every record of a domain exposes the same columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The field was present in the source tree.
    Value(T),
    /// The field was absent.
    NotApplicable,
}

impl<T> Field<T> {
    /// Check if the field holds the sentinel.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Field::NotApplicable)
    }

    /// Return `self` if present, otherwise evaluate `fallback`.
    pub fn or_else(self, fallback: impl FnOnce() -> Result<Field<T>>) -> Result<Field<T>> {
        match self {
            Field::Value(_) => Ok(self),
            Field::NotApplicable => fallback(),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::NotApplicable
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(v) => write!(f, "{}", v),
            Field::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

/// Scalar types that can be read out of a result tree.
pub trait FromTree: Sized {
    /// Name of the expected kind, used in error messages.
    const KIND: &'static str;

    /// Convert a tree value, returning `None` on a type mismatch.
    fn from_tree(value: &Value) -> Option<Self>;
}

impl FromTree for bool {
    const KIND: &'static str = "boolean";

    fn from_tree(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromTree for String {
    const KIND: &'static str = "string";

    fn from_tree(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            // Parsers emit numeric ids (process ids, areas) for some platforms
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl FromTree for u64 {
    const KIND: &'static str = "unsigned integer";

    fn from_tree(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A named mapping inside a result tree.
///
/// The key is the name the mapping was found under (an interface name, a
/// process index, a neighbor id) and is carried into error messages.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    key: &'a str,
    map: &'a Map<String, Value>,
}

impl<'a> Entry<'a> {
    /// Wrap a tree value found under `key`.
    pub fn new(key: &'a str, value: &'a Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| ExtractError::NotAMapping {
            path: key.to_string(),
        })?;
        Ok(Self { key, map })
    }

    /// The key this entry was found under.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Read a field that must be present.
    pub fn required<T: FromTree>(&self, field: &str) -> Result<T> {
        let value = self
            .map
            .get(field)
            .ok_or_else(|| ExtractError::MissingField {
                entry: self.key.to_string(),
                field: field.to_string(),
            })?;
        self.convert(field, value)
    }

    /// Read a field that may be absent.
    ///
    /// Absent, `null` and values of an unexpected type all yield
    /// [`Field::NotApplicable`]. Only required fields fail on a type mismatch.
    pub fn optional<T: FromTree>(&self, field: &str) -> Result<Field<T>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(Field::NotApplicable),
            Some(value) => match T::from_tree(value) {
                Some(v) => Ok(Field::Value(v)),
                None => {
                    debug!(
                        "Ignoring '{}' in '{}': not a {}",
                        field,
                        self.key,
                        T::KIND
                    );
                    Ok(Field::NotApplicable)
                }
            },
        }
    }

    /// Read an optional field below one or more nested mappings.
    ///
    /// A missing intermediate level means the field is absent.
    pub fn optional_path<T: FromTree>(&self, path: &[&str]) -> Result<Field<T>> {
        let Some((field, parents)) = path.split_last() else {
            return Ok(Field::NotApplicable);
        };

        let mut map = self.map;
        for parent in parents {
            match map.get(*parent).and_then(Value::as_object) {
                Some(next) => map = next,
                None => return Ok(Field::NotApplicable),
            }
        }

        Entry { key: self.key, map }.optional(field)
    }

    /// Get a nested mapping that may be absent.
    pub fn child(&self, field: &str) -> Result<Option<Entry<'a>>> {
        match self.map.get_key_value(field) {
            None => Ok(None),
            Some((key, value)) => Entry::new(key, value).map(Some),
        }
    }

    /// Get a nested mapping that must be present.
    pub fn required_child(&self, field: &str) -> Result<Entry<'a>> {
        self.child(field)?.ok_or_else(|| {
            ExtractError::MissingField {
                entry: self.key.to_string(),
                field: field.to_string(),
            }
            .into()
        })
    }

    /// Follow a chain of nested mappings, stopping at the first absent level.
    pub fn descend(&self, path: &[&str]) -> Result<Option<Entry<'a>>> {
        let mut current = *self;
        for field in path {
            match current.child(field)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Iterate the entries of a nested mapping, in source order.
    ///
    /// An absent mapping has no entries.
    pub fn children(&self, field: &str) -> Result<Vec<Entry<'a>>> {
        match self.child(field)? {
            Some(child) => child.entries(),
            None => Ok(Vec::new()),
        }
    }

    /// Iterate the entries of this mapping, in source order.
    pub fn entries(&self) -> Result<Vec<Entry<'a>>> {
        self.map
            .iter()
            .map(|(key, value)| Entry::new(key, value))
            .collect()
    }

    fn convert<T: FromTree>(&self, field: &str, value: &Value) -> Result<T> {
        T::from_tree(value).ok_or_else(|| {
            ExtractError::WrongType {
                entry: self.key.to_string(),
                field: field.to_string(),
                expected: T::KIND,
            }
            .into()
        })
    }
}

/// Wrap the top of a result tree.
pub fn root(tree: &Value) -> Result<Entry<'_>> {
    Entry::new("<root>", tree)
}
