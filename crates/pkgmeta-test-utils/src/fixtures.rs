//! Ready-made builders and tracing setup for tests.

use pkgmeta_core::PackageBuilder;
use pkgmeta_meta::Requirements;
use tracing_subscriber::EnvFilter;

/// Install a test-writer tracing subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// The canonical sample package: name `sample`, version `1.0.0`, one
/// runtime dependency `lib-a >= 1.0` and one unconstrained development
/// dependency `test-tool`.
pub fn sample_builder() -> PackageBuilder {
    let mut builder = PackageBuilder::new();
    builder.name("sample").set("version", "1.0.0");
    builder
        .add_runtime("lib-a", ">= 1.0")
        .and_then(|b| b.add_development("test-tool", Requirements::any()))
        .expect("sample_builder: fixture dependencies are valid");
    builder
}
