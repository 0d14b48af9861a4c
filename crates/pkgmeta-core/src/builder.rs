//! Package builder context
//!
//! A [`PackageBuilder`] is constructed per package descriptor. It owns one
//! [`AttributeStore`] and one [`DependencySet`], tracks which bucket plain
//! [`depend_on`](PackageBuilder::depend_on) calls write to, and synthesizes
//! the final [`Specification`].
//!
//! # Example
//!
//! ```
//! use pkgmeta_core::PackageBuilder;
//!
//! # fn main() -> pkgmeta_core::Result<()> {
//! let mut builder = PackageBuilder::new();
//! builder
//!     .name("sample")
//!     .set("version", "1.0.0")
//!     .set("license", "MIT");
//! builder.depend_on("lib-a", ">= 1.0")?;
//! builder.development(|b| b.depend_on("test-tool", None::<&str>).map(|_| ()))?;
//!
//! let spec = builder.specification()?;
//! assert_eq!(spec.name(), Some("sample"));
//! assert_eq!(spec.runtime_dependencies().len(), 1);
//! assert_eq!(spec.development_dependencies().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use pkgmeta_fs::{ChainablePath, DescriptorPath};
use pkgmeta_meta::{
    AttributeStore, DependencyKind, DependencySet, Detached, Requirements, Value,
};

use crate::Result;
use crate::specification::Specification;
use crate::synthesis::{self, SynthesisReport};
use crate::target::Target;

/// Builder context for one package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageBuilder {
    attributes: AttributeStore,
    dependencies: DependencySet,
    mode: DependencyKind,
    root: Option<ChainablePath>,
}

/// Restores the builder's dependency mode when a scope ends, including
/// on unwind.
struct ModeGuard<'a> {
    builder: &'a mut PackageBuilder,
    previous: DependencyKind,
}

impl Drop for ModeGuard<'_> {
    fn drop(&mut self) {
        tracing::trace!(mode = %self.previous, "leaving dependency scope");
        self.builder.mode = self.previous;
    }
}

impl PackageBuilder {
    /// Create an empty builder in runtime mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for the package rooted at `root`.
    pub fn with_root(root: impl Into<ChainablePath>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<&ChainablePath> {
        self.root.as_ref()
    }

    /// Where this package's descriptor lives, if a root is known.
    pub fn descriptor_path(&self) -> Option<ChainablePath> {
        self.root
            .as_ref()
            .map(|root| DescriptorPath::Descriptor.locate(root))
    }

    /// Generic attribute access, see [`AttributeStore::access`].
    pub fn access(&mut self, name: &str, values: Vec<Value>) -> Option<Value> {
        self.attributes.access(&mut Detached, name, values)
    }

    /// Store an attribute.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.access(name, vec![value.into()]);
        self
    }

    /// Read a stored attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set the package name, stringifying whatever is given.
    pub fn name(&mut self, name: impl fmt::Display) -> &mut Self {
        self.set("name", name.to_string())
    }

    /// Add a dependency to the bucket selected by the current mode.
    ///
    /// Outside a [`development`](Self::development) scope this adds a
    /// runtime dependency.
    pub fn depend_on(
        &mut self,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<&mut Self> {
        self.dependencies.add(self.mode, name, requirements)?;
        Ok(self)
    }

    pub fn add_runtime(
        &mut self,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<&mut Self> {
        self.dependencies.add_runtime(name, requirements)?;
        Ok(self)
    }

    pub fn add_development(
        &mut self,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<&mut Self> {
        self.dependencies.add_development(name, requirements)?;
        Ok(self)
    }

    /// Run `scope` with [`depend_on`](Self::depend_on) writing to the
    /// development bucket.
    ///
    /// The previous mode is restored when `scope` returns or panics.
    pub fn development<F, R>(&mut self, scope: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let previous = std::mem::replace(&mut self.mode, DependencyKind::Development);
        tracing::trace!("entering development scope");
        let mut guard = ModeGuard {
            builder: self,
            previous,
        };
        scope(&mut *guard.builder)
    }

    /// The bucket plain `depend_on` calls currently write to.
    pub fn mode(&self) -> DependencyKind {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode == DependencyKind::Development
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    /// Synthesize into `target`.
    pub fn synthesize<T: Target>(&self, target: T) -> Result<T> {
        synthesis::synthesize(&self.attributes, &self.dependencies, target)
    }

    /// Synthesize into `target`, also reporting skipped attributes.
    pub fn synthesize_with_report<T: Target>(&self, target: T) -> Result<(T, SynthesisReport)> {
        synthesis::synthesize_with_report(&self.attributes, &self.dependencies, target)
    }

    /// Synthesize a fresh [`Specification`].
    pub fn specification(&self) -> Result<Specification> {
        self.synthesize(Specification::new())
    }

    /// Alias for [`specification`](Self::specification).
    pub fn spec(&self) -> Result<Specification> {
        self.specification()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_default_mode_is_runtime() {
        let builder = PackageBuilder::new();
        assert_eq!(builder.mode(), DependencyKind::Runtime);
        assert!(!builder.is_development());
    }

    #[test]
    fn test_development_scope_routes_depend_on() {
        let mut builder = PackageBuilder::new();
        builder.depend_on("jewel", None::<&str>).unwrap();
        builder
            .development(|b| {
                assert!(b.is_development());
                b.depend_on("rookie", None::<&str>).map(|_| ())
            })
            .unwrap();
        builder.depend_on("after", "1.0").unwrap();

        let deps = builder.dependencies();
        assert!(deps.runtime().contains_key("jewel"));
        assert!(deps.runtime().contains_key("after"));
        assert!(deps.development().contains_key("rookie"));
        assert!(!builder.is_development());
    }

    #[test]
    fn test_nested_scope_restores_development() {
        let mut builder = PackageBuilder::new();
        builder.development(|outer| {
            outer.development(|inner| assert!(inner.is_development()));
            assert!(outer.is_development());
        });
        assert_eq!(builder.mode(), DependencyKind::Runtime);
    }

    #[test]
    fn test_mode_restored_after_panic() {
        let mut builder = PackageBuilder::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            builder.development(|_| panic!("descriptor failed"));
        }));
        assert!(result.is_err());
        assert_eq!(builder.mode(), DependencyKind::Runtime);
    }

    #[test]
    fn test_name_is_stringified() {
        let mut builder = PackageBuilder::new();
        builder.name(42);
        assert_eq!(builder.get("name"), Some(&Value::from("42")));
    }

    #[test]
    fn test_access_with_multiple_values() {
        let mut builder = PackageBuilder::new();
        builder.access("author", vec![Value::from("A"), Value::from("B")]);
        assert_eq!(builder.access("author", vec![]), Some(Value::from(["A", "B"])));
    }

    #[test]
    fn test_descriptor_path() {
        assert_eq!(PackageBuilder::new().descriptor_path(), None);
        let builder = PackageBuilder::with_root("/srv/sample");
        assert_eq!(
            builder.descriptor_path().map(|p| p.to_string()),
            Some("/srv/sample/package.toml".to_string())
        );
    }
}
