//! Path helpers for pkgmeta
//!
//! Provides chainable, immutable path construction and the well-known
//! descriptor locations relative to a package root. Nothing in this crate
//! touches the filesystem.

pub mod constants;
pub mod path;

pub use constants::DescriptorPath;
pub use path::ChainablePath;
