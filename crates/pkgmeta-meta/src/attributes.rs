//! Dynamic attribute storage
//!
//! The [`AttributeStore`] accepts arbitrary attribute names at the call
//! site. Reads and writes go through a single [`AttributeStore::access`]
//! entry point which consults a [`Delegate`] before falling back to the
//! local map.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::value::Value;

/// Something an [`AttributeStore`] can forward attribute calls to.
///
/// A delegate advertises which attributes it can read and write by name.
/// Attribute names are passed already normalized (see [`normalize_name`]).
pub trait Delegate {
    /// Read the attribute `name`, or `None` if there is no such reader.
    fn read_attribute(&self, name: &str) -> Option<Value>;

    /// Whether a writer for `name` exists.
    fn has_writer(&self, name: &str) -> bool;

    /// Invoke the writer for `name` with positional `values`.
    ///
    /// Only called after [`has_writer`](Self::has_writer) returned true.
    fn write_attribute(&mut self, name: &str, values: Vec<Value>) -> Value;
}

/// A delegate exposing no readers and no writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Delegate for Detached {
    fn read_attribute(&self, _name: &str) -> Option<Value> {
        None
    }

    fn has_writer(&self, _name: &str) -> bool {
        false
    }

    fn write_attribute(&mut self, _name: &str, values: Vec<Value>) -> Value {
        Value::List(values)
    }
}

/// Strip surrounding whitespace and one trailing `=`, `?` or `!`.
///
/// `summary`, `summary=` and `summary!` all address the same key.
pub fn normalize_name(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed
        .strip_suffix(['=', '?', '!'])
        .unwrap_or(trimmed)
        .trim_end()
}

/// Key/value bag for descriptive package metadata.
///
/// A key maps to at most one value; setting a key again overwrites it.
/// Keys iterate in sorted order, which keeps synthesis deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    entries: BTreeMap<String, Value>,
}

impl AttributeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Read or write the attribute `name`.
    ///
    /// - no values: the local value if present, else the delegate's reader,
    ///   else `None`
    /// - one value: forwarded to the delegate's writer if it has one,
    ///   otherwise stored locally
    /// - several values: as above, but a locally stored value is the whole
    ///   ordered list
    ///
    /// Never fails; an absent attribute reads as `None`.
    pub fn access<D>(&mut self, delegate: &mut D, name: &str, mut values: Vec<Value>) -> Option<Value>
    where
        D: Delegate + ?Sized,
    {
        let key = normalize_name(name);

        if values.is_empty() {
            return self
                .entries
                .get(key)
                .cloned()
                .or_else(|| delegate.read_attribute(key));
        }

        if delegate.has_writer(key) {
            tracing::trace!(attribute = %key, "forwarding attribute write to delegate");
            return Some(delegate.write_attribute(key, values));
        }

        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::List(values)
        };
        Some(self.insert(key.to_string(), value).clone())
    }

    /// Get the locally stored value for `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(normalize_name(name))
    }

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// This is a local-only write: no delegate is consulted. Use
    /// [`access`](Self::access) when a delegate may own the attribute.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &Value {
        self.insert(normalize_name(name).to_string(), value.into())
    }

    fn insert(&mut self, key: String, value: Value) -> &Value {
        tracing::trace!(attribute = %key, "storing attribute");
        match self.entries.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(value);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(value),
        }
    }

    /// Check if a value is stored locally for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize_name(name))
    }

    /// Iterate stored attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of stored attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
