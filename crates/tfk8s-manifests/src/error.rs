#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("configuration does not match the manifest: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("manifest cannot be rendered as YAML: {0}")]
    Marshal(#[from] serde_yaml::Error),
}

impl ManifestError {
    /// diagnostic summary reported for this failure
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Decode(_) => "Unable to decode configuration",
            Self::Marshal(_) => "Unable to marshal manifest",
        }
    }
}
