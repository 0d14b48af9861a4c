//! [`RecordingTarget`] for observing synthesis.

use std::collections::{BTreeMap, BTreeSet};

use pkgmeta_core::{Result, Target};
use pkgmeta_meta::{Delegate, DependencyKind, Value, validate_dependency_name};

/// One call received by a [`RecordingTarget`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Write { name: String, values: Vec<Value> },
    Dependency {
        kind: DependencyKind,
        name: String,
        requirements: Vec<String>,
    },
}

/// A target that accepts a fixed set of writers and records everything.
///
/// # Example
///
/// ```rust
/// use pkgmeta_meta::Delegate;
/// use pkgmeta_test_utils::RecordingTarget;
///
/// let target = RecordingTarget::with_writers(["name", "version"]);
/// assert!(target.has_writer("name"));
/// assert!(!target.has_writer("homepage"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    writers: BTreeSet<String>,
    /// Last values written per attribute
    pub attributes: BTreeMap<String, Vec<Value>>,
    /// Every call in arrival order
    pub calls: Vec<Call>,
}

impl RecordingTarget {
    /// A target that has no writers at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A target exposing writers (and readers) for `names`.
    pub fn with_writers<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            writers: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Dependencies of `kind` as `(name, requirements)` pairs, in call order.
    pub fn dependencies(&self, kind: DependencyKind) -> Vec<(String, Vec<String>)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Dependency {
                    kind: k,
                    name,
                    requirements,
                } if *k == kind => Some((name.clone(), requirements.clone())),
                _ => None,
            })
            .collect()
    }

    /// Index of the first dependency call, if any.
    pub fn first_dependency_call(&self) -> Option<usize> {
        self.calls
            .iter()
            .position(|call| matches!(call, Call::Dependency { .. }))
    }

    /// Index of the last attribute write, if any.
    pub fn last_write_call(&self) -> Option<usize> {
        self.calls
            .iter()
            .rposition(|call| matches!(call, Call::Write { .. }))
    }

    fn record_dependency(
        &mut self,
        kind: DependencyKind,
        name: &str,
        requirements: &[String],
    ) -> Result<()> {
        validate_dependency_name(name)?;
        self.calls.push(Call::Dependency {
            kind,
            name: name.to_string(),
            requirements: requirements.to_vec(),
        });
        Ok(())
    }
}

impl Delegate for RecordingTarget {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        let values = self.attributes.get(name)?;
        match values.as_slice() {
            [single] => Some(single.clone()),
            many => Some(Value::List(many.to_vec())),
        }
    }

    fn has_writer(&self, name: &str) -> bool {
        self.writers.contains(name)
    }

    fn write_attribute(&mut self, name: &str, values: Vec<Value>) -> Value {
        self.calls.push(Call::Write {
            name: name.to_string(),
            values: values.clone(),
        });
        self.attributes.insert(name.to_string(), values);
        self.read_attribute(name).unwrap_or(Value::List(Vec::new()))
    }
}

impl Target for RecordingTarget {
    fn add_runtime_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()> {
        self.record_dependency(DependencyKind::Runtime, name, requirements)
    }

    fn add_development_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()> {
        self.record_dependency(DependencyKind::Development, name, requirements)
    }
}
