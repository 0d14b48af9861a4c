//! Chainable path handling for locating package files
//!
//! [`ChainablePath`] builds paths through repeated `join`/`child` calls.
//! Every call returns a new value; the receiver is never mutated.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A path normalized to forward slashes that grows by chaining joins.
///
/// Empty and `.` components are dropped and separators are normalized
/// to `/`. `..` components are kept as written; resolving them is left to
/// the host platform when the path is finally used for I/O.
///
/// # Example
///
/// ```
/// use pkgmeta_fs::ChainablePath;
///
/// let root = ChainablePath::new("/home/person/sample");
/// let file = root.child("lib").child("sample.rs");
/// assert_eq!(file.as_str(), "/home/person/sample/lib/sample.rs");
/// assert_eq!(root.as_str(), "/home/person/sample");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ChainablePath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl ChainablePath {
    /// Create a new ChainablePath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&raw),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    ///
    /// An absolute segment replaces the receiver entirely.
    pub fn join(&self, segment: impl AsRef<Path>) -> Self {
        let segment = Self::new(segment);
        if segment.is_absolute() {
            return segment;
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment.inner)
        } else {
            format!("{}/{}", self.inner, segment.inner)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Chaining alias for [`join`](Self::join), reads as a directory walk.
    pub fn child(&self, name: impl AsRef<Path>) -> Self {
        self.join(name)
    }

    /// Join every segment in order.
    pub fn join_all<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        segments
            .into_iter()
            .fold(self.clone(), |path, segment| path.join(segment))
    }

    /// Whether the path starts with a root (`/`, `//` or a drive letter).
    pub fn is_absolute(&self) -> bool {
        !split_root(&self.inner).0.is_empty()
    }

    /// Whether the path lacks a root or drive component.
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Get the parent directory.
    ///
    /// Roots and single relative components have no parent.
    pub fn parent(&self) -> Option<Self> {
        let (root, rest) = split_root(&self.inner);
        if rest.is_empty() || rest == "." {
            return None;
        }
        match rest.rfind('/') {
            Some(idx) => Some(Self {
                inner: format!("{}{}", root, &rest[..idx]),
            }),
            None if !root.is_empty() => Some(Self {
                inner: root.to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let (_, rest) = split_root(&self.inner);
        match rest {
            "" | "." => None,
            _ => rest.rsplit('/').next(),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 || name == ".." {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Split a normalized path into its root prefix and the remainder.
fn split_root(path: &str) -> (&str, &str) {
    if path.starts_with("//") && !path.starts_with("///") {
        return path.split_at(2);
    }
    if path.starts_with('/') {
        return path.split_at(1);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.len() == 2 {
            return (path, "");
        }
        if bytes[2] == b'/' {
            return path.split_at(3);
        }
    }
    ("", path)
}

fn clean(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let (root, rest) = split_root(&unified);
    let mut root = root.to_string();
    // A bare drive ("C:") is rooted as "C:/"
    if root.len() == 2 && root.ends_with(':') {
        root.push('/');
    }
    let components: Vec<&str> = rest
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();

    if components.is_empty() {
        if root.is_empty() {
            return ".".to_string();
        }
        return root;
    }
    format!("{}{}", root, components.join("/"))
}

impl Default for ChainablePath {
    fn default() -> Self {
        Self::new(".")
    }
}

impl AsRef<Path> for ChainablePath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for ChainablePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for ChainablePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ChainablePath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for ChainablePath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for ChainablePath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<&ChainablePath> for ChainablePath {
    fn from(p: &ChainablePath) -> Self {
        p.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root_variants() {
        assert_eq!(split_root("/a/b"), ("/", "a/b"));
        assert_eq!(split_root("//server/share"), ("//", "server/share"));
        assert_eq!(split_root("C:/Users"), ("C:/", "Users"));
        assert_eq!(split_root("a/b"), ("", "a/b"));
    }

    #[test]
    fn test_clean_collapses_separators() {
        assert_eq!(clean("a//b/./c/"), "a/b/c");
        assert_eq!(clean(""), ".");
        assert_eq!(clean("///"), "/");
        assert_eq!(clean("C:"), "C:/");
    }

    #[test]
    fn test_clean_keeps_parent_components() {
        assert_eq!(clean("a/../b"), "a/../b");
    }
}
