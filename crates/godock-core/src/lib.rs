//! Core types and configuration for godock.
//!
//! This crate reads Go module metadata from `go.mod` ([`GoModule`],
//! [`ManifestScanner`]), defines the optional `godock.toml` schema
//! ([`GodockConfig`]), and the shared error type.

pub mod config;
pub mod error;
pub mod manifest;

pub use config::{BuildConfig, GodockConfig};
pub use error::{Error, Result};
pub use manifest::{GoModule, ManifestScanner, module_name};
