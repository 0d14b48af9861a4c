//! Setter registry for target types
//!
//! Maps attribute names to typed writer and reader functions so a target
//! can answer "do you have a writer named X" from a static table instead
//! of reflection. A registry is built once per target type.

use std::collections::HashMap;

use pkgmeta_meta::Value;

/// Writes positional values into a field of `T`.
pub type Writer<T> = fn(&mut T, Vec<Value>);

/// Reads a field of `T`, `None` when the field is unset.
pub type Reader<T> = fn(&T) -> Option<Value>;

/// Registry mapping attribute names to writers and readers of `T`.
///
/// # Example
///
/// ```
/// use pkgmeta_core::SetterRegistry;
/// use pkgmeta_meta::Value;
///
/// #[derive(Default)]
/// struct Note {
///     title: Option<String>,
/// }
///
/// let registry = SetterRegistry::<Note>::new()
///     .writer("title", |note, values| note.title = Some(Value::List(values).to_string()))
///     .reader("title", |note| note.title.clone().map(Value::String));
///
/// let mut note = Note::default();
/// assert!(registry.has_writer("title"));
/// assert_eq!(
///     registry.write(&mut note, "title", vec![Value::from("Hello")]),
///     Some(Value::from("Hello"))
/// );
/// assert!(!registry.has_writer("body"));
/// ```
pub struct SetterRegistry<T> {
    writers: HashMap<&'static str, Writer<T>>,
    readers: HashMap<&'static str, Reader<T>>,
}

impl<T> SetterRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            writers: HashMap::new(),
            readers: HashMap::new(),
        }
    }

    /// Register a writer, replacing any previous writer of that name.
    pub fn writer(mut self, name: &'static str, writer: Writer<T>) -> Self {
        self.writers.insert(name, writer);
        self
    }

    /// Register a reader, replacing any previous reader of that name.
    pub fn reader(mut self, name: &'static str, reader: Reader<T>) -> Self {
        self.readers.insert(name, reader);
        self
    }

    /// Check if a writer is registered for `name`.
    pub fn has_writer(&self, name: &str) -> bool {
        self.writers.contains_key(name)
    }

    /// Check if a reader is registered for `name`.
    pub fn has_reader(&self, name: &str) -> bool {
        self.readers.contains_key(name)
    }

    /// Invoke the writer for `name`.
    ///
    /// Returns `None` when no writer is registered. Otherwise returns the
    /// value read back through the same-named reader, or the written
    /// values as a list when there is no reader.
    pub fn write(&self, target: &mut T, name: &str, values: Vec<Value>) -> Option<Value> {
        let writer = self.writers.get(name)?;
        match self.readers.get(name) {
            Some(reader) => {
                writer(target, values);
                Some(reader(target).unwrap_or_else(|| Value::List(Vec::new())))
            }
            None => {
                let echoed = Value::List(values.clone());
                writer(target, values);
                Some(echoed)
            }
        }
    }

    /// Invoke the reader for `name`, `None` if unregistered or unset.
    pub fn read(&self, target: &T, name: &str) -> Option<Value> {
        self.readers.get(name).and_then(|reader| reader(target))
    }

    /// List all writer names, sorted.
    pub fn list_writers(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.writers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered writers.
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// Check if no writer is registered.
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl<T> Default for SetterRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for SetterRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetterRegistry")
            .field("writers", &self.list_writers())
            .field("readers", &self.readers.len())
            .finish()
    }
}
