//! Package builder and specification synthesis for pkgmeta
//!
//! This crate ties the storage types from `pkgmeta-meta` to a target
//! record:
//!
//! - **Builder context**: [`PackageBuilder`] owns the attributes and
//!   dependencies for one package, with a scoped development mode
//! - **Target boundary**: [`Target`] plus a static [`SetterRegistry`] per
//!   target type
//! - **Synthesis**: [`synthesize`] projects the accumulated state onto a
//!   target, attributes first, then runtime and development dependencies
//! - **Descriptors**: [`Descriptor`] replays a TOML document onto a builder
//!
//! # Architecture
//!
//! ```text
//!        PackageBuilder / Descriptor
//!                   |
//!              pkgmeta-core  ---> Specification (Target)
//!                   |
//!        +----------+----------+
//!        |                     |
//!   pkgmeta-meta          pkgmeta-fs
//! ```

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod specification;
pub mod synthesis;
pub mod target;

pub use builder::PackageBuilder;
pub use descriptor::{Descriptor, RequirementSpec};
pub use error::{Error, Result};
pub use registry::SetterRegistry;
pub use specification::{Dependency, Specification};
pub use synthesis::{SynthesisReport, apply, synthesize, synthesize_with_report};
pub use target::Target;
