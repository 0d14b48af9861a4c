//! Error types for pkgmeta-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid dependency name '{name}': {reason}")]
    InvalidDependencyName { name: String, reason: &'static str },

    #[error("Invalid dependency selection: {selection}")]
    InvalidSelection { selection: String },
}
