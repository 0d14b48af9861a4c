//! The target specification boundary
//!
//! Synthesis writes into anything implementing [`Target`]: attribute
//! writers come from [`Delegate`], dependency registration is added here.

use pkgmeta_meta::{Delegate, DependencyKind};

use crate::Result;

/// A record that synthesis can populate.
///
/// Implementations decide which attributes they understand through
/// [`Delegate::has_writer`] and must reject dependency names that are
/// not plausible package identifiers.
pub trait Target: Delegate {
    /// Register a runtime dependency. An empty `requirements` slice means
    /// any version.
    fn add_runtime_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()>;

    /// Register a development dependency. An empty `requirements` slice
    /// means any version.
    fn add_development_dependency(&mut self, name: &str, requirements: &[String]) -> Result<()>;

    /// Register a dependency in the bucket for `kind`.
    fn add_dependency(
        &mut self,
        kind: DependencyKind,
        name: &str,
        requirements: &[String],
    ) -> Result<()> {
        match kind {
            DependencyKind::Runtime => self.add_runtime_dependency(name, requirements),
            DependencyKind::Development => self.add_development_dependency(name, requirements),
        }
    }
}
