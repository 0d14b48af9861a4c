//! TOML package descriptors
//!
//! A descriptor is the declarative form of a sequence of builder calls:
//!
//! ```toml
//! [package]
//! name = "sample"
//! version = "1.0.0"
//!
//! [dependencies]
//! lib-a = ">= 1.0"
//!
//! [dev-dependencies]
//! test-tool = []
//! ```
//!
//! `[package]` values may be strings, numbers, booleans, datetimes or
//! arrays of those. Datetimes are kept in their TOML text form.
//!
//! The caller supplies the document text; nothing here reads files.

use std::collections::BTreeMap;

use pkgmeta_meta::{Requirements, Value, normalize_name};
use serde::Deserialize;

use crate::builder::PackageBuilder;
use crate::{Error, Result};

/// One dependency entry: a single constraint or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RequirementSpec {
    /// `lib-a = ">= 1.0"`
    Single(String),
    /// `lib-b = ["~> 2.1", ">= 2.1.3"]`, `[]` accepts any version
    List(Vec<String>),
}

impl From<RequirementSpec> for Requirements {
    fn from(spec: RequirementSpec) -> Self {
        match spec {
            RequirementSpec::Single(constraint) => Requirements::from(constraint),
            RequirementSpec::List(constraints) => Requirements::from(constraints),
        }
    }
}

/// Parsed package descriptor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    /// Open-ended package attributes
    #[serde(default)]
    pub package: BTreeMap<String, toml::Value>,

    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<String, RequirementSpec>,

    /// Development-only dependencies
    #[serde(default, rename = "dev-dependencies")]
    pub dev_dependencies: BTreeMap<String, RequirementSpec>,
}

impl Descriptor {
    /// Parse a descriptor from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replay this descriptor onto `builder`.
    ///
    /// Each `[package]` key is stored as one attribute value. Dependency
    /// names are validated as they are added. On error `builder` is left
    /// as it was.
    pub fn apply(&self, builder: &mut PackageBuilder) -> Result<()> {
        let mut staged = builder.clone();

        for (key, value) in &self.package {
            if normalize_name(key).is_empty() {
                return Err(Error::Descriptor {
                    message: format!("empty attribute name '{}' in [package]", key),
                });
            }
            staged.access(key, vec![attribute_value(key, value.clone())?]);
        }

        for (name, spec) in &self.dependencies {
            staged.add_runtime(name.as_str(), spec.clone())?;
        }
        for (name, spec) in &self.dev_dependencies {
            staged.add_development(name.as_str(), spec.clone())?;
        }

        *builder = staged;
        tracing::debug!(
            attributes = self.package.len(),
            runtime = self.dependencies.len(),
            development = self.dev_dependencies.len(),
            "applied package descriptor"
        );
        Ok(())
    }
}

/// Convert one `[package]` value; tables have no attribute form.
fn attribute_value(key: &str, value: toml::Value) -> Result<Value> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::List(
            items
                .into_iter()
                .map(|item| attribute_value(key, item))
                .collect::<Result<_>>()?,
        ),
        toml::Value::Table(_) => {
            return Err(Error::Descriptor {
                message: format!("attribute '{}' in [package] cannot be a table", key),
            });
        }
    })
}

impl PackageBuilder {
    /// Build a package from descriptor text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let descriptor = Descriptor::from_toml_str(content)?;
        let mut builder = Self::new();
        descriptor.apply(&mut builder)?;
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_descriptor() {
        let descriptor = Descriptor::from_toml_str(
            r#"
[package]
name = "sample"
"#,
        )
        .unwrap();
        assert_eq!(descriptor.package["name"].as_str(), Some("sample"));
        assert!(descriptor.dependencies.is_empty());
    }

    #[test]
    fn test_requirement_forms() {
        let descriptor = Descriptor::from_toml_str(
            r#"
[dependencies]
single = ">= 1.0"
many = ["~> 2.1", ">= 2.1.3"]
any = []
"#,
        )
        .unwrap();
        assert_eq!(
            descriptor.dependencies["single"],
            RequirementSpec::Single(">= 1.0".to_string())
        );
        assert!(Requirements::from(descriptor.dependencies["any"].clone()).is_any());
        assert_eq!(
            Requirements::from(descriptor.dependencies["many"].clone()).as_slice().len(),
            2
        );
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result = Descriptor::from_toml_str("[build-dependencies]\ncc = \"1\"\n");
        assert!(matches!(result, Err(Error::TomlDe(_))));
    }

    #[test]
    fn test_empty_attribute_name_rejected() {
        let descriptor = Descriptor::from_toml_str("[package]\n\"=\" = \"x\"\n").unwrap();
        let err = descriptor.apply(&mut PackageBuilder::new()).unwrap_err();
        assert!(matches!(err, Error::Descriptor { .. }));
    }

    #[test]
    fn test_datetime_attribute_kept_as_text() {
        let mut builder = PackageBuilder::new();
        Descriptor::from_toml_str("[package]\nreleased = 1979-05-27\n")
            .unwrap()
            .apply(&mut builder)
            .unwrap();
        assert_eq!(builder.get("released"), Some(&Value::from("1979-05-27")));
    }

    #[test]
    fn test_table_attribute_names_the_key() {
        let descriptor = Descriptor::from_toml_str("[package]\nmeta = { a = 1 }\n").unwrap();
        let err = descriptor.apply(&mut PackageBuilder::new()).unwrap_err();
        assert!(matches!(err, Error::Descriptor { .. }));
        assert!(err.to_string().contains("'meta'"), "unexpected error: {err}");
    }

    #[test]
    fn test_failed_apply_leaves_builder_unchanged() {
        let descriptor = Descriptor::from_toml_str(
            "[package]\nname = \"s\"\n\n[dependencies]\naaa = \"1.0\"\n\"bad name\" = \"1.0\"\n",
        )
        .unwrap();
        let mut builder = PackageBuilder::new();
        builder.set("version", "0.1.0");
        let before = builder.clone();

        let err = descriptor.apply(&mut builder).unwrap_err();

        assert!(err.is_invalid_dependency_name());
        assert_eq!(builder, before);
        assert_eq!(builder.get("name"), None);
        assert!(builder.dependencies().runtime().is_empty());
    }
}
