//! Well-known package descriptor locations.

use std::path::Path;

use crate::ChainablePath;

/// Standard package files and directories, relative to a package root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorPath {
    /// The `package.toml` descriptor at the package root
    Descriptor,
    /// The `.pkgmeta` directory holding generated metadata
    MetadataDir,
    /// The synthesized `specification.json` inside the metadata directory
    Specification,
}

impl DescriptorPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Descriptor => "package.toml",
            Self::MetadataDir => ".pkgmeta",
            Self::Specification => ".pkgmeta/specification.json",
        }
    }

    /// Resolve this entry under `root` without touching the filesystem.
    pub fn locate(&self, root: &ChainablePath) -> ChainablePath {
        root.join(self.as_str())
    }
}

impl AsRef<Path> for DescriptorPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for DescriptorPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DescriptorPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_under_root() {
        let root = ChainablePath::new("/srv/sample");
        assert_eq!(
            DescriptorPath::Descriptor.locate(&root).as_str(),
            "/srv/sample/package.toml"
        );
        assert_eq!(
            DescriptorPath::Specification.locate(&root).as_str(),
            "/srv/sample/.pkgmeta/specification.json"
        );
    }
}
