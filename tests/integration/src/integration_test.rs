//! End-to-end integration test across the workspace
//!
//! This test exercises the complete flow: locate descriptor -> parse ->
//! builder -> synthesis -> specification.

use pkgmeta_core::{Descriptor, PackageBuilder, Specification};
use pkgmeta_fs::{ChainablePath, DescriptorPath};
use pkgmeta_meta::{DependencyKind, Requirements, Selection, Value};
use pkgmeta_test_utils::{RecordingTarget, init_tracing};
use pretty_assertions::assert_eq;

const DESCRIPTOR: &str = r#"
[package]
name = "jewel"
summary = "Easy access to package metadata"
version = "0.0.1"
homepage = "https://example.com/jewel"
license = "Mozilla Public License, version 2.0"
author = "Person"
email = "person@example.com"
files = ["lib/jewel.rs", "lib/jewel/metadata.rs"]

[dev-dependencies]
bundler = []
redcarpet = []
rookie = []
yard = []
"#;

#[test]
fn test_descriptor_to_specification() {
    init_tracing();
    let root = ChainablePath::new("/srv/packages").child("jewel");
    let builder = PackageBuilder::with_root(root.clone());
    assert_eq!(
        builder.descriptor_path(),
        Some(DescriptorPath::Descriptor.locate(&root))
    );

    let mut builder = builder;
    Descriptor::from_toml_str(DESCRIPTOR)
        .unwrap()
        .apply(&mut builder)
        .unwrap();

    let spec = builder.specification().unwrap();
    assert_eq!(spec.name(), Some("jewel"));
    assert_eq!(spec.authors(), &["Person".to_string()]);
    assert_eq!(spec.files().len(), 2);
    assert!(spec.runtime_dependencies().is_empty());
    let names: Vec<&str> = spec
        .development_dependencies()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, vec!["bundler", "redcarpet", "rookie", "yard"]);
}

#[test]
fn test_programmatic_and_descriptor_builders_agree() {
    let mut programmatic = PackageBuilder::new();
    programmatic
        .name("sample")
        .set("version", "1.0.0");
    programmatic.depend_on("lib-a", ">= 1.0").unwrap();
    programmatic
        .development(|b| b.depend_on("test-tool", Requirements::any()).map(|_| ()))
        .unwrap();

    let from_toml = PackageBuilder::from_toml_str(
        r#"
[package]
name = "sample"
version = "1.0.0"

[dependencies]
lib-a = ">= 1.0"

[dev-dependencies]
test-tool = []
"#,
    )
    .unwrap();

    assert_eq!(
        programmatic.specification().unwrap(),
        from_toml.specification().unwrap()
    );
}

#[test]
fn test_activation_selection_policies() {
    let mut builder = PackageBuilder::new();
    builder.add_runtime("shared", ">= 2.0").unwrap();
    builder.add_development("shared", ">= 1.0").unwrap();
    builder.add_development("linter", Requirements::any()).unwrap();

    let deps = builder.dependencies();
    let shipping: Vec<_> = deps.each(Selection::Runtime).collect();
    let everything: Vec<_> = deps.each("true".parse().unwrap()).collect();
    let only: Vec<_> = deps.each(Selection::DevelopmentOnly).collect();

    assert_eq!(shipping, vec![("shared".to_string(), Requirements::from(">= 2.0"))]);
    assert_eq!(
        everything,
        vec![
            ("linter".to_string(), Requirements::any()),
            ("shared".to_string(), Requirements::from(">= 2.0")),
        ]
    );
    assert_eq!(only.len(), 2);
    assert_eq!(only[1].1, Requirements::from(">= 1.0"));
}

#[test]
fn test_custom_target_receives_same_state() {
    let mut builder = PackageBuilder::new();
    builder.name("sample").set("homepage", "https://example.com");
    builder.add_runtime("lib-a", ">= 1.0").unwrap();

    let target = builder
        .synthesize(RecordingTarget::with_writers(["name"]))
        .unwrap();

    assert_eq!(target.attributes["name"], vec![Value::from("sample")]);
    assert!(!target.attributes.contains_key("homepage"));
    assert_eq!(
        target.dependencies(DependencyKind::Runtime),
        vec![("lib-a".to_string(), vec![">= 1.0".to_string()])]
    );
}

#[test]
fn test_invalid_dependency_leaves_state_unchanged() {
    let mut builder = PackageBuilder::new();
    builder.add_runtime("lib-a", "1.0").unwrap();
    let err = builder.add_runtime("", "1.0").unwrap_err();

    assert!(err.is_invalid_dependency_name());
    assert_eq!(builder.dependencies().runtime().len(), 1);
}

#[test]
fn test_specification_serializes() {
    let spec: Specification = PackageBuilder::from_toml_str("[package]\nname = \"sample\"\n")
        .unwrap()
        .specification()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
    assert_eq!(json["name"], "sample");
    assert_eq!(json["runtime_dependencies"], serde_json::json!([]));
}
