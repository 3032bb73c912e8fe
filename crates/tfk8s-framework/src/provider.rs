use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    DataSource, Diagnostics, FrameworkError, MetadataRequest, ReadRequest, ReadResponse, Schema,
};

/// Registry of data sources served under one provider type name.
pub struct Provider {
    type_name: String,
    data_sources: BTreeMap<String, Box<dyn DataSource>>,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("type_name", &self.type_name)
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Provider {
    /// type names are lowercase letters, digits and underscores
    pub fn new(type_name: impl Into<String>) -> Result<Self, FrameworkError> {
        let type_name = type_name.into();
        let valid = type_name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
            && type_name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid {
            return Err(FrameworkError::InvalidProviderName(type_name));
        }

        Ok(Self {
            type_name,
            data_sources: BTreeMap::new(),
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn register<D>(&mut self, data_source: D) -> Result<(), FrameworkError>
    where
        D: DataSource + 'static,
    {
        let metadata = data_source.metadata(&MetadataRequest {
            provider_type_name: self.type_name.clone(),
        });
        if self.data_sources.contains_key(&metadata.type_name) {
            return Err(FrameworkError::DuplicateDataSource(metadata.type_name));
        }

        debug!(type_name = %metadata.type_name, "registered data source");
        self.data_sources
            .insert(metadata.type_name, Box::new(data_source));
        Ok(())
    }

    pub fn data_sources(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(|name| name.as_str())
    }

    pub fn data_source(&self, type_name: &str) -> Result<&dyn DataSource, FrameworkError> {
        self.data_sources
            .get(type_name)
            .map(|data_source| data_source.as_ref())
            .ok_or_else(|| FrameworkError::DataSourceNotFound(type_name.to_owned()))
    }

    pub fn schema(&self, type_name: &str) -> Result<&Schema, FrameworkError> {
        Ok(self.data_source(type_name)?.schema())
    }

    /// Validate the configuration, then run the data source's read handler.
    /// The handler is not called when validation reports an error.
    #[instrument(skip(self, config))]
    pub fn read_data_source(&self, type_name: &str, config: Value) -> ReadResponse {
        let data_source = match self.data_source(type_name) {
            Ok(data_source) => data_source,
            Err(err) => {
                return ReadResponse {
                    state: None,
                    diagnostics: not_found(err),
                };
            }
        };

        let mut diagnostics = data_source.schema().validate_config(&config);
        if diagnostics.has_error() {
            debug!(
                errors = diagnostics.errors().count(),
                "config rejected before read"
            );
            return ReadResponse {
                state: None,
                diagnostics,
            };
        }

        let response = data_source.read(ReadRequest { config });
        diagnostics.append(response.diagnostics);
        ReadResponse {
            state: response.state,
            diagnostics,
        }
    }
}

fn not_found(err: FrameworkError) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    diagnostics.add_error("Data Source Type Not Found", err.to_string());
    diagnostics
}

#[cfg(test)]
mod tests {

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use crate::{
        Attribute, Attributes, DataSource, FrameworkError, MetadataRequest, MetadataResponse,
        ReadRequest, ReadResponse, Schema,
    };
    use crate::validator::length_at_least;

    use super::Provider;

    struct EchoDataSource {
        schema: Schema,
        reads: Arc<AtomicUsize>,
    }

    impl EchoDataSource {
        fn new() -> Self {
            Self::with_counter(Arc::new(AtomicUsize::new(0)))
        }

        fn with_counter(reads: Arc<AtomicUsize>) -> Self {
            Self {
                schema: Schema::new(
                    "echo",
                    Attributes::new()
                        .with(
                            "name",
                            Attribute::string("name")
                                .required()
                                .validator(length_at_least(1)),
                        )
                        .with("echo", Attribute::string("echo").computed()),
                ),
                reads,
            }
        }
    }

    impl DataSource for EchoDataSource {
        fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
            MetadataResponse {
                type_name: format!("{}_echo", request.provider_type_name),
            }
        }

        fn schema(&self) -> &Schema {
            &self.schema
        }

        fn read(&self, request: ReadRequest) -> ReadResponse {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let mut state = request.config;
            state["echo"] = state["name"].clone();
            ReadResponse {
                state: Some(state),
                ..Default::default()
            }
        }
    }

    #[test]
    fn test_invalid_type_name() {
        assert_eq!(
            Provider::new("K8s").unwrap_err(),
            FrameworkError::InvalidProviderName("K8s".to_owned())
        );
        assert!(Provider::new("").is_err());
        assert!(Provider::new("k8s_2").is_ok());
    }

    #[test]
    fn test_register_and_list() {
        let mut provider = Provider::new("k8s").expect("provider");
        provider.register(EchoDataSource::new()).expect("register");
        assert_eq!(provider.data_sources().collect::<Vec<_>>(), vec!["k8s_echo"]);

        assert_eq!(
            provider.register(EchoDataSource::new()).unwrap_err(),
            FrameworkError::DuplicateDataSource("k8s_echo".to_owned())
        );
        assert!(provider.schema("k8s_echo").is_ok());
        assert!(provider.schema("k8s_missing").is_err());
    }

    #[test]
    fn test_read() {
        let mut provider = Provider::new("k8s").expect("provider");
        provider.register(EchoDataSource::new()).expect("register");

        let response = provider.read_data_source("k8s_echo", json!({ "name": "fluid" }));
        assert!(response.diagnostics.is_empty());
        assert_eq!(
            response.state,
            Some(json!({ "name": "fluid", "echo": "fluid" }))
        );
    }

    #[test]
    fn test_invalid_config_never_reaches_read() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut provider = Provider::new("k8s").expect("provider");
        provider
            .register(EchoDataSource::with_counter(reads.clone()))
            .expect("register");

        let response = provider.read_data_source("k8s_echo", json!({ "name": "" }));
        assert!(response.diagnostics.has_error());
        assert!(response.state.is_none());
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        let response = provider.read_data_source("k8s_echo", json!({ "name": "fluid" }));
        assert!(!response.diagnostics.has_error());
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unknown_data_source() {
        let provider = Provider::new("k8s").expect("provider");
        let response = provider.read_data_source("k8s_echo", json!({}));
        let diag = response.diagnostics.errors().next().expect("error");
        assert_eq!(diag.summary, "Data Source Type Not Found");
    }
}
