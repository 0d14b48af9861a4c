//! Shared test utilities for the pkgmeta workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll a fake target. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`target`]: [`RecordingTarget`], a [`Target`](pkgmeta_core::Target)
//!   that records every call it receives
//! - [`fixtures`]: ready-made builders and tracing setup

pub mod fixtures;
pub mod target;

pub use fixtures::{init_tracing, sample_builder};
pub use target::{Call, RecordingTarget};
