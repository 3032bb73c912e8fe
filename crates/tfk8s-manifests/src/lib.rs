//!
//! # tfk8s manifests
//!
//! Read-only data sources that render Kubernetes custom resources as YAML
//! manifests. Configuration is checked against a schema mirroring the
//! custom resource, decoded into typed structs and serialized with sorted
//! keys, so the same configuration always yields the same manifest.
//!
mod datasource;
mod error;
mod manifest;
mod provider;

pub mod core;
pub mod fluid;
pub mod validators;

pub use k8_types;

pub use self::datasource::{ManifestDataSource, ManifestSpec, manifest_schema};
pub use self::error::ManifestError;
pub use self::manifest::{Manifest, ManifestMetadata};
pub use self::provider::{DEFAULT_PROVIDER_NAME, provider};
