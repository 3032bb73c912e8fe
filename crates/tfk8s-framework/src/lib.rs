//!
//! # tfk8s framework
//!
//! The contract between a provider and its data sources: a static schema
//! tree, attribute validators, diagnostics reported against attribute paths,
//! and a registry that validates configuration before handing it to a
//! data source's read handler.
//!
mod datasource;
mod diagnostics;
mod error;
mod path;
mod provider;

pub mod schema;
pub mod validator;

pub use self::datasource::{
    DataSource, MetadataRequest, MetadataResponse, ReadRequest, ReadResponse,
};
pub use self::diagnostics::{Diagnostic, Diagnostics, Severity};
pub use self::error::FrameworkError;
pub use self::path::AttributePath;
pub use self::provider::Provider;
pub use self::schema::{Attribute, AttributeKind, Attributes, Presence, Schema};
pub use self::validator::Validator;
