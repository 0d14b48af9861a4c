//! Error types for pkgmeta-core

/// Result type for pkgmeta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or synthesizing a package
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Descriptor content that parses but cannot be applied
    #[error("Invalid descriptor: {message}")]
    Descriptor { message: String },

    // Transparent wrappers for underlying crate errors
    /// Metadata error from pkgmeta-meta, including invalid dependency names
    #[error(transparent)]
    Meta(#[from] pkgmeta_meta::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error reports a rejected dependency name.
    pub fn is_invalid_dependency_name(&self) -> bool {
        matches!(
            self,
            Error::Meta(pkgmeta_meta::Error::InvalidDependencyName { .. })
        )
    }
}
