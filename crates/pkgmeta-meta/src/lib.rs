//! Attribute and dependency storage for pkgmeta.
//!
//! This crate holds the mutable state a package descriptor accumulates
//! before it is projected onto a specification:
//!
//! - [`AttributeStore`]: an open-ended bag of named [`Value`]s with
//!   delegate-first dispatch through the [`Delegate`] trait
//! - [`DependencySet`]: runtime and development buckets of
//!   name to [`Requirements`] mappings

pub mod attributes;
pub mod dependencies;
pub mod error;
pub mod validation;
pub mod value;

pub use attributes::{AttributeStore, Delegate, Detached, normalize_name};
pub use dependencies::{DependencyKind, DependencySet, Requirements, Selection};
pub use error::{Error, Result};
pub use validation::{is_valid_dependency_name, validate_dependency_name};
pub use value::Value;
