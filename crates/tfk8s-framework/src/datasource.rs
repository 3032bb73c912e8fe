use serde_json::Value;

use crate::{Diagnostics, Schema};

#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub provider_type_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataResponse {
    pub type_name: String,
}

#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// configuration, already validated against the data source schema
    pub config: Value,
}

#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    /// `None` when the read failed
    pub state: Option<Value>,
    pub diagnostics: Diagnostics,
}

/// A read-only construct that computes values from its configuration.
pub trait DataSource: Send + Sync {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    fn schema(&self) -> &Schema;

    fn read(&self, request: ReadRequest) -> ReadResponse;
}
