//!
//! # Manifest data source
//!
//! Read-only data source that renders a custom resource as YAML from its
//! Terraform configuration. One instance exists per custom resource type.
//!
use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, trace};

use tfk8s_framework::{
    Attribute, Attributes, DataSource, MetadataRequest, MetadataResponse, ReadRequest,
    ReadResponse, Schema,
};

use crate::ManifestError;
use crate::k8_types::Spec;
use crate::manifest::{Manifest, metadata_attributes};

/// Custom resource spec that can be served as a manifest data source.
pub trait ManifestSpec: Spec {
    /// appended to the provider type name, starts with `_`
    const DATA_SOURCE_SUFFIX: &'static str;

    /// description of the data source
    const DESCRIPTION: &'static str;

    /// description of the `spec` block
    const SPEC_DESCRIPTION: &'static str;

    fn spec_attributes() -> Attributes;

    /// schema of the data source, built at most once per process
    fn schema() -> &'static Schema;
}

/// `yaml`, `metadata` and `spec` for the data source of `S`
pub fn manifest_schema<S>() -> Schema
where
    S: ManifestSpec,
{
    Schema::new(
        S::DESCRIPTION,
        Attributes::new()
            .with(
                "yaml",
                Attribute::string("The generated manifest in YAML format.").computed(),
            )
            .with(
                "metadata",
                Attribute::single_nested(
                    "Data that helps uniquely identify the object.",
                    metadata_attributes(),
                )
                .required(),
            )
            .with(
                "spec",
                Attribute::single_nested(S::SPEC_DESCRIPTION, S::spec_attributes()),
            ),
    )
}

pub struct ManifestDataSource<S> {
    data: PhantomData<S>,
}

impl<S> ManifestDataSource<S>
where
    S: ManifestSpec,
{
    pub fn new() -> Self {
        Self { data: PhantomData }
    }

    /// Translate the configuration to the manifest of `S` and render it.
    pub fn render(config: &Value) -> Result<String, ManifestError> {
        let translated = S::schema().to_manifest(config);
        trace!(%translated, "translated configuration");

        let mut manifest: Manifest<S> = serde_json::from_value(translated)?;
        manifest.stamp();
        manifest.to_yaml()
    }
}

impl<S> Default for ManifestDataSource<S>
where
    S: ManifestSpec,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DataSource for ManifestDataSource<S>
where
    S: ManifestSpec,
{
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: format!("{}{}", request.provider_type_name, S::DATA_SOURCE_SUFFIX),
        }
    }

    fn schema(&self) -> &Schema {
        S::schema()
    }

    fn read(&self, request: ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::default();

        let yaml = match Self::render(&request.config) {
            Ok(yaml) => yaml,
            Err(err) => {
                debug!(kind = %S::kind(), %err, "manifest not rendered");
                response.diagnostics.add_error(err.summary(), err.to_string());
                return response;
            }
        };
        debug!(kind = %S::kind(), bytes = yaml.len(), "rendered manifest");

        let mut state = request.config;
        if let Some(attributes) = state.as_object_mut() {
            attributes.insert("yaml".to_owned(), Value::String(yaml));
        }
        response.state = Some(state);
        response
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use tfk8s_framework::{AttributeKind, DataSource, ReadRequest};

    use crate::fluid::ThinRuntimeSpec;

    use super::*;

    type ThinRuntimeManifest = ManifestDataSource<ThinRuntimeSpec>;

    fn read(config: Value) -> ReadResponse {
        ThinRuntimeManifest::new().read(ReadRequest { config })
    }

    fn rendered(response: &ReadResponse) -> Value {
        let yaml = response
            .state
            .as_ref()
            .and_then(|state| state["yaml"].as_str())
            .expect("yaml");
        serde_yaml::from_str(yaml).expect("parse")
    }

    #[test]
    fn test_type_name() {
        let response = ThinRuntimeManifest::new().metadata(&MetadataRequest {
            provider_type_name: "k8s".to_owned(),
        });
        assert_eq!(
            response.type_name,
            "k8s_data_fluid_io_thin_runtime_v1alpha1_manifest"
        );
    }

    #[test]
    fn test_minimal_manifest() {
        let config = json!({
            "metadata": { "name": "demo", "namespace": "default" }
        });
        let response = read(config.clone());
        assert!(response.diagnostics.is_empty());

        let state = response.state.expect("state");
        assert_eq!(
            state["yaml"],
            json!("apiVersion: data.fluid.io/v1alpha1\nkind: ThinRuntime\nmetadata:\n  name: demo\n  namespace: default\n")
        );
        assert_eq!(state["metadata"], config["metadata"]);
    }

    #[test]
    fn test_full_manifest() {
        let response = read(json!({
            "yaml": null,
            "metadata": {
                "name": "demo",
                "namespace": "fluid",
                "labels": { "app": "demo" },
                "annotations": null
            },
            "spec": {
                "profile_name": "nfs",
                "replicas": 1,
                "disable_prometheus": null,
                "tieredstore": {
                    "levels": [ { "mediumtype": "MEM", "path": "/dev/shm", "quota": "2Gi" } ]
                },
                "worker": {
                    "liveness_probe": { "tcp_socket": { "port": "8080" } },
                    "readiness_probe": { "http_get": { "port": "http", "path": "/ready" } },
                    "ports": [ { "container_port": 9000, "host_ip": "0.0.0.0" } ]
                },
                "volumes": [
                    { "name": "cache", "host_path": { "path": "/mnt/cache" } },
                    { "name": "disk", "aws_elastic_block_store": { "volume_id": "vol-1" } }
                ],
                "run_as": { "uid": 1000, "gid": 1000, "user": "fluid", "group": "fluid" }
            }
        }));
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);

        assert_eq!(
            rendered(&response),
            json!({
                "apiVersion": "data.fluid.io/v1alpha1",
                "kind": "ThinRuntime",
                "metadata": { "name": "demo", "namespace": "fluid", "labels": { "app": "demo" } },
                "spec": {
                    "profileName": "nfs",
                    "replicas": 1,
                    "tieredstore": {
                        "levels": [ { "mediumtype": "MEM", "path": "/dev/shm", "quota": "2Gi" } ]
                    },
                    "worker": {
                        "livenessProbe": { "tcpSocket": { "port": 8080 } },
                        "readinessProbe": { "httpGet": { "port": "http", "path": "/ready" } },
                        "ports": [ { "containerPort": 9000, "hostIP": "0.0.0.0" } ]
                    },
                    "volumes": [
                        { "name": "cache", "hostPath": { "path": "/mnt/cache" } },
                        { "name": "disk", "awsElasticBlockStore": { "volumeID": "vol-1" } }
                    ],
                    "runAs": { "uid": 1000, "gid": 1000, "user": "fluid", "group": "fluid" }
                }
            })
        );
    }

    /// config with every attribute of the schema set to a valid value
    fn fill(attributes: &Attributes) -> Value {
        let mut config = serde_json::Map::new();
        for (name, attribute) in attributes.iter() {
            if attribute.is_computed() {
                continue;
            }
            let value = match attribute.kind() {
                AttributeKind::String {
                    int_or_string: true,
                } => json!("http"),
                AttributeKind::String { .. } => json!(string_value(name)),
                AttributeKind::Bool => json!(true),
                AttributeKind::Int64 => json!(1),
                AttributeKind::List => json!(["value"]),
                AttributeKind::Map => json!({ "key": "value" }),
                AttributeKind::SingleNested(nested) => fill(nested),
                AttributeKind::ListNested(nested) => json!([fill(nested)]),
            };
            config.insert((*name).to_owned(), value);
        }
        Value::Object(config)
    }

    fn string_value(name: &str) -> &'static str {
        match name {
            "mediumtype" => "MEM",
            "volume_type" => "hostPath",
            "network_mode" => "HostNetwork",
            "clean_policy" => "OnDemand",
            "quota_list" => "1Gi",
            _ => "value",
        }
    }

    #[test]
    fn test_every_attribute_reaches_the_manifest() {
        let schema = ThinRuntimeSpec::schema();
        let config = fill(schema.attributes());
        let diags = schema.validate_config(&config);
        assert!(diags.is_empty(), "{diags:?}");

        let mut expected = schema.to_manifest(&config);
        expected["apiVersion"] = json!("data.fluid.io/v1alpha1");
        expected["kind"] = json!("ThinRuntime");

        let response = read(config);
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
        assert_eq!(rendered(&response), expected);
    }

    #[test]
    fn test_deterministic() {
        let config = json!({
            "metadata": {
                "name": "demo",
                "namespace": "default",
                "labels": { "b": "2", "a": "1" },
                "annotations": { "fluid.io/owner": "data" }
            },
            "spec": { "fuse": { "options": { "ro": "true", "allow_other": "" } } }
        });
        let first = read(config.clone()).state.expect("state");
        let second = read(config).state.expect("state");
        assert_eq!(first["yaml"], second["yaml"]);
    }

    #[test]
    fn test_decode_failure() {
        // bypasses schema validation, which rejects this before a read
        let response = read(json!({
            "metadata": { "name": "demo", "namespace": "default" },
            "spec": { "replicas": "two" }
        }));
        assert!(response.state.is_none());
        let error = response.diagnostics.errors().next().expect("error");
        assert_eq!(error.summary, "Unable to decode configuration");
    }
}
