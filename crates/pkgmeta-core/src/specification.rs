//! The synthesized package specification
//!
//! [`Specification`] is the record a [`PackageBuilder`](crate::PackageBuilder)
//! projects its state onto. Fields are only written through the setter
//! registry and the [`Target`] dependency operations; everything else is
//! read-only.

use std::sync::LazyLock;

use pkgmeta_meta::{Delegate, DependencyKind, Requirements, Value, validate_dependency_name};
use serde::Serialize;

use crate::Result;
use crate::registry::SetterRegistry;
use crate::target::Target;

/// A dependency registered on a [`Specification`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Dependency {
    pub name: String,
    pub requirements: Requirements,
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new(name: impl Into<String>, requirements: Requirements, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            requirements,
            kind,
        }
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.requirements, self.kind)
    }
}

/// Immutable description of a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Specification {
    name: Option<String>,
    version: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    homepage: Option<String>,
    licenses: Vec<String>,
    authors: Vec<String>,
    email: Vec<String>,
    files: Vec<String>,
    executables: Vec<String>,
    runtime_dependencies: Vec<Dependency>,
    development_dependencies: Vec<Dependency>,
}

/// Joins the flattened values into one scalar; no values clears the field.
fn scalar(values: Vec<Value>) -> Option<String> {
    let parts = Value::List(values).into_strings();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn strings(values: Vec<Value>) -> Vec<String> {
    Value::List(values).into_strings()
}

fn read_scalar(field: &Option<String>) -> Option<Value> {
    field.clone().map(Value::String)
}

fn read_list(field: &[String]) -> Option<Value> {
    Some(Value::from(field.to_vec()))
}

static REGISTRY: LazyLock<SetterRegistry<Specification>> = LazyLock::new(|| {
    SetterRegistry::<Specification>::new()
        .writer("name", |s, v| s.name = scalar(v))
        .reader("name", |s| read_scalar(&s.name))
        .writer("version", |s, v| s.version = scalar(v))
        .reader("version", |s| read_scalar(&s.version))
        .writer("summary", |s, v| s.summary = scalar(v))
        .reader("summary", |s| read_scalar(&s.summary))
        .writer("description", |s, v| s.description = scalar(v))
        .reader("description", |s| read_scalar(&s.description))
        .writer("homepage", |s, v| s.homepage = scalar(v))
        .reader("homepage", |s| read_scalar(&s.homepage))
        .writer("license", |s, v| s.licenses = strings(v))
        .reader("license", |s| s.licenses.first().cloned().map(Value::String))
        .writer("licenses", |s, v| s.licenses = strings(v))
        .reader("licenses", |s| read_list(&s.licenses))
        .writer("author", |s, v| s.authors = strings(v))
        .reader("author", |s| s.authors.first().cloned().map(Value::String))
        .writer("authors", |s, v| s.authors = strings(v))
        .reader("authors", |s| read_list(&s.authors))
        .writer("email", |s, v| s.email = strings(v))
        .reader("email", |s| read_list(&s.email))
        .writer("files", |s, v| s.files = strings(v))
        .reader("files", |s| read_list(&s.files))
        .writer("executables", |s, v| s.executables = strings(v))
        .reader("executables", |s| read_list(&s.executables))
});

impl Specification {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of attribute writers this type understands.
    pub fn registry() -> &'static SetterRegistry<Specification> {
        &*REGISTRY
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// The first license, if any.
    pub fn license(&self) -> Option<&str> {
        self.licenses.first().map(String::as_str)
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn email(&self) -> &[String] {
        &self.email
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn executables(&self) -> &[String] {
        &self.executables
    }

    pub fn runtime_dependencies(&self) -> &[Dependency] {
        &self.runtime_dependencies
    }

    pub fn development_dependencies(&self) -> &[Dependency] {
        &self.development_dependencies
    }

    /// Every registered dependency, runtime first.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.runtime_dependencies
            .iter()
            .chain(self.development_dependencies.iter())
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn push_dependency(
        &mut self,
        kind: DependencyKind,
        name: &str,
        requirements: &[String],
    ) -> Result<()> {
        validate_dependency_name(name)?;
        let dependency = Dependency::new(name, Requirements::new(requirements.iter().cloned()), kind);
        match kind {
            DependencyKind::Runtime => self.runtime_dependencies.push(dependency),
            DependencyKind::Development => self.development_dependencies.push(dependency),
        }
        Ok(())
    }
}

impl Delegate for Specification {
    fn read_attribute(&self, name: &str) -> Option<Value> {
        REGISTRY.read(self, name)
    }

    fn has_writer(&self, name: &str) -> bool {
        REGISTRY.has_writer(name)
    }

    fn write_attribute(&mut self, name: &str, values: Vec<Value>) -> Value {
        REGISTRY.write(self, name, values).unwrap_or_else(|| {
            tracing::warn!(attribute = %name, "specification has no writer for attribute");
            Value::List(Vec::new())
        })
    }
}

impl Target for Specification {
    fn add_runtime_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()> {
        self.push_dependency(DependencyKind::Runtime, name, requirements)
    }

    fn add_development_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()> {
        self.push_dependency(DependencyKind::Development, name, requirements)
    }
}
