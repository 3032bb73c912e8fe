#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("invalid provider type name: {0:?}")]
    InvalidProviderName(String),
    #[error("data source already registered: {0}")]
    DuplicateDataSource(String),
    #[error("data source not found: {0}")]
    DataSourceNotFound(String),
}
