//! Runtime and development dependency buckets
//!
//! A [`DependencySet`] keeps two independent name to [`Requirements`]
//! mappings. The same name may live in both; the merged view
//! ([`DependencySet::all`]) lets the runtime entry win.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::validate_dependency_name;
use crate::{Error, Result};

/// Ordered version constraints for one dependency.
///
/// An empty list is the explicit "any version" marker. It is distinct
/// from a missing entry and from a constraint that happens to be `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirements(Vec<String>);

impl Requirements {
    /// Requirements accepting any version.
    pub fn any() -> Self {
        Self(Vec::new())
    }

    /// Build from an ordered list of constraints.
    pub fn new<I, S>(constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(constraints.into_iter().map(Into::into).collect())
    }

    /// Whether no constraint was given.
    pub fn is_any(&self) -> bool {
        self.0.is_empty()
    }

    /// The constraints in declaration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Requirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.0.join(", "))
        }
    }
}

impl From<&str> for Requirements {
    fn from(s: &str) -> Self {
        Self(vec![s.to_string()])
    }
}

impl From<String> for Requirements {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl From<Option<&str>> for Requirements {
    fn from(s: Option<&str>) -> Self {
        s.map(Self::from).unwrap_or_default()
    }
}

impl From<Vec<String>> for Requirements {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl From<Vec<&str>> for Requirements {
    fn from(v: Vec<&str>) -> Self {
        Self::new(v)
    }
}

impl<const N: usize> From<[&str; N]> for Requirements {
    fn from(v: [&str; N]) -> Self {
        Self::new(v)
    }
}

/// Which bucket a dependency belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Needed wherever the package is used.
    #[default]
    Runtime,
    /// Needed only to develop the package.
    Development,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Runtime => write!(f, "runtime"),
            DependencyKind::Development => write!(f, "development"),
        }
    }
}

/// Which mapping [`DependencySet::each`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// Only what ships: the runtime bucket.
    #[default]
    Runtime,
    /// Everything needed to develop: development merged with runtime.
    All,
    /// Only the development bucket.
    DevelopmentOnly,
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "runtime" | "default" => Ok(Selection::Runtime),
            "all" | "true" => Ok(Selection::All),
            "only" | "development" | "development-only" => Ok(Selection::DevelopmentOnly),
            _ => Err(Error::InvalidSelection {
                selection: s.to_string(),
            }),
        }
    }
}

/// Runtime and development dependency buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencySet {
    runtime: BTreeMap<String, Requirements>,
    development: BTreeMap<String, Requirements>,
}

impl DependencySet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a runtime dependency, replacing an earlier entry of the same name.
    pub fn add_runtime(
        &mut self,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<()> {
        self.add(DependencyKind::Runtime, name, requirements)
    }

    /// Add a development dependency, replacing an earlier entry of the same name.
    pub fn add_development(
        &mut self,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<()> {
        self.add(DependencyKind::Development, name, requirements)
    }

    /// Add a dependency to the bucket for `kind`.
    ///
    /// The name is validated first; on failure neither bucket changes.
    pub fn add(
        &mut self,
        kind: DependencyKind,
        name: impl Into<String>,
        requirements: impl Into<Requirements>,
    ) -> Result<()> {
        let name = name.into();
        validate_dependency_name(&name)?;
        let requirements = requirements.into();
        tracing::trace!(%kind, dependency = %name, %requirements, "adding dependency");
        self.bucket_mut(kind).insert(name, requirements);
        Ok(())
    }

    /// The runtime bucket.
    pub fn runtime(&self) -> &BTreeMap<String, Requirements> {
        &self.runtime
    }

    /// The development bucket.
    pub fn development(&self) -> &BTreeMap<String, Requirements> {
        &self.development
    }

    /// The bucket for `kind`.
    pub fn bucket(&self, kind: DependencyKind) -> &BTreeMap<String, Requirements> {
        match kind {
            DependencyKind::Runtime => &self.runtime,
            DependencyKind::Development => &self.development,
        }
    }

    fn bucket_mut(&mut self, kind: DependencyKind) -> &mut BTreeMap<String, Requirements> {
        match kind {
            DependencyKind::Runtime => &mut self.runtime,
            DependencyKind::Development => &mut self.development,
        }
    }

    /// Development entries overlaid with runtime entries.
    ///
    /// On a name present in both buckets the runtime requirements win.
    pub fn all(&self) -> BTreeMap<String, Requirements> {
        let mut merged = self.development.clone();
        merged.extend(
            self.runtime
                .iter()
                .map(|(name, requirements)| (name.clone(), requirements.clone())),
        );
        merged
    }

    /// The mapping chosen by `selection`, borrowed where possible.
    pub fn select(&self, selection: Selection) -> Cow<'_, BTreeMap<String, Requirements>> {
        match selection {
            Selection::Runtime => Cow::Borrowed(&self.runtime),
            Selection::All => Cow::Owned(self.all()),
            Selection::DevelopmentOnly => Cow::Borrowed(&self.development),
        }
    }

    /// Iterate the mapping chosen by `selection` in name order.
    pub fn each(&self, selection: Selection) -> impl Iterator<Item = (String, Requirements)> {
        self.select(selection).into_owned().into_iter()
    }

    /// Look up `name` in one bucket.
    pub fn get(&self, kind: DependencyKind, name: &str) -> Option<&Requirements> {
        self.bucket(kind).get(name)
    }

    /// Check if `name` is present in either bucket.
    pub fn contains(&self, name: &str) -> bool {
        self.runtime.contains_key(name) || self.development.contains_key(name)
    }

    /// Total entries across both buckets, counting shared names twice.
    pub fn len(&self) -> usize {
        self.runtime.len() + self.development.len()
    }

    /// Check if both buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.development.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_runtime_wins_in_all() {
        let mut deps = DependencySet::new();
        deps.add_development("x", "1.0").unwrap();
        deps.add_runtime("x", "2.0").unwrap();

        assert_eq!(deps.all()["x"], Requirements::from("2.0"));
        // Both buckets keep their own entry
        assert_eq!(deps.get(DependencyKind::Development, "x"), Some(&Requirements::from("1.0")));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_development_only_entry_survives_merge() {
        let mut deps = DependencySet::new();
        deps.add_development("y", "1.0").unwrap();
        assert_eq!(deps.all()["y"], Requirements::from("1.0"));
    }

    #[test]
    fn test_empty_requirements_is_any() {
        let mut deps = DependencySet::new();
        deps.add_runtime("lib", Requirements::any()).unwrap();
        deps.add_runtime("other", None::<&str>).unwrap();

        assert!(deps.runtime()["lib"].is_any());
        assert!(deps.runtime()["other"].is_any());
        assert_eq!(deps.runtime()["lib"].to_string(), "*");
    }

    #[test]
    fn test_empty_string_is_a_constraint() {
        let requirements = Requirements::from("");
        assert!(!requirements.is_any());
        assert_eq!(requirements.as_slice(), &[String::new()]);
    }

    #[test]
    fn test_invalid_name_leaves_buckets_unchanged() {
        let mut deps = DependencySet::new();
        deps.add_runtime("ok", "1.0").unwrap();

        let err = deps.add_runtime("", "1.0").unwrap_err();
        assert!(matches!(err, Error::InvalidDependencyName { .. }));
        assert_eq!(deps.runtime().len(), 1);
        assert!(deps.development().is_empty());
    }

    #[test]
    fn test_each_selects_bucket() {
        let mut deps = DependencySet::new();
        deps.add_runtime("a", ">= 1.0").unwrap();
        deps.add_development("b", Requirements::any()).unwrap();

        let names = |selection: Selection| deps.each(selection).map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(names(Selection::Runtime), vec!["a"]);
        assert_eq!(names(Selection::All), vec!["a", "b"]);
        assert_eq!(names(Selection::DevelopmentOnly), vec!["b"]);
    }

    #[test]
    fn test_selection_from_str() {
        assert_eq!("default".parse::<Selection>().unwrap(), Selection::Runtime);
        assert_eq!("true".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("only".parse::<Selection>().unwrap(), Selection::DevelopmentOnly);
        assert!("sometimes".parse::<Selection>().is_err());
        assert_eq!(Selection::default(), Selection::Runtime);
    }

    #[test]
    fn test_readding_replaces_requirements() {
        let mut deps = DependencySet::new();
        deps.add_runtime("a", "~> 1.0").unwrap();
        deps.add_runtime("a", ["~> 2.0", ">= 2.0.3"]).unwrap();
        assert_eq!(
            deps.runtime()["a"].as_slice(),
            &["~> 2.0".to_string(), ">= 2.0.3".to_string()]
        );
    }
}
