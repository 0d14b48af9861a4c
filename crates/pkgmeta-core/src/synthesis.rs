//! Specification synthesis
//!
//! Projects an [`AttributeStore`] and a [`DependencySet`] onto a
//! [`Target`]:
//!
//! 1. every stored attribute with a matching writer is applied, list
//!    values unpacked into positional arguments; the rest are skipped
//! 2. runtime dependencies are registered
//! 3. development dependencies are registered
//!
//! Attributes always land before any dependency so a target can rely on
//! its name being set when dependencies arrive.

use pkgmeta_meta::{AttributeStore, DependencyKind, DependencySet};

use crate::Result;
use crate::target::Target;

/// What a synthesis pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Attributes the target accepted, in application order
    pub applied: Vec<String>,
    /// Attributes the target has no writer for
    pub skipped: Vec<String>,
    /// Number of runtime dependencies registered
    pub runtime: usize,
    /// Number of development dependencies registered
    pub development: usize,
}

impl SynthesisReport {
    /// Check if every stored attribute reached the target.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Apply attributes and dependencies to `target` in place.
///
/// Unsupported attributes are skipped. A dependency name the target
/// rejects aborts the pass with that error; attributes already applied
/// stay applied.
pub fn apply<T>(
    attributes: &AttributeStore,
    dependencies: &DependencySet,
    target: &mut T,
) -> Result<SynthesisReport>
where
    T: Target + ?Sized,
{
    let mut report = SynthesisReport::default();

    for (key, value) in attributes.iter() {
        if target.has_writer(key) {
            tracing::trace!(attribute = %key, %value, "applying attribute");
            target.write_attribute(key, value.clone().into_arguments());
            report.applied.push(key.to_string());
        } else {
            tracing::debug!(attribute = %key, "target has no writer for attribute, skipping");
            report.skipped.push(key.to_string());
        }
    }

    for kind in [DependencyKind::Runtime, DependencyKind::Development] {
        for (name, requirements) in dependencies.bucket(kind) {
            target.add_dependency(kind, name, requirements.as_slice())?;
            match kind {
                DependencyKind::Runtime => report.runtime += 1,
                DependencyKind::Development => report.development += 1,
            }
        }
    }

    tracing::debug!(
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        runtime = report.runtime,
        development = report.development,
        "synthesized specification"
    );
    Ok(report)
}

/// Synthesize into `target` and return it together with a report.
pub fn synthesize_with_report<T: Target>(
    attributes: &AttributeStore,
    dependencies: &DependencySet,
    mut target: T,
) -> Result<(T, SynthesisReport)> {
    let report = apply(attributes, dependencies, &mut target)?;
    Ok((target, report))
}

/// Synthesize into `target` and return it.
pub fn synthesize<T: Target>(
    attributes: &AttributeStore,
    dependencies: &DependencySet,
    target: T,
) -> Result<T> {
    synthesize_with_report(attributes, dependencies, target).map(|(target, _)| target)
}
