//!
//! Container level settings: images, environment, ports, resources, probes
//! and lifecycle hooks.
//!
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IntOrString, Quantity};

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Vec<ResourceClaim>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<BTreeMap<String, Quantity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<BTreeMap<String, Quantity>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceClaim {
    pub name: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerPort {
    pub container_port: i32,
    #[serde(rename = "hostIP", skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvVar {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<EnvVarSource>,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            value_from: None,
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvVarSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map_key_ref: Option<KeySelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_ref: Option<ObjectFieldSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_field_ref: Option<ResourceFieldSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key_ref: Option<KeySelector>,
}

/// Selects a key of a ConfigMap or a Secret.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeySelector {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectFieldSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    pub field_path: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceFieldSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divisor: Option<Quantity>,
    pub resource: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<GrpcAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GrpcAction {
    pub port: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpGetAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<Vec<HttpHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub port: IntOrString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TcpSocketAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub port: IntOrString,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Lifecycle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_start: Option<LifecycleHandler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_stop: Option<LifecycleHandler>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LifecycleHandler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ExecAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HttpGetAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<TcpSocketAction>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeMount {
    pub mount_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_propagation: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_path_expr: Option<String>,
}

pub(crate) mod container_schema {

    use tfk8s_framework::{Attribute, Attributes};

    use crate::core::int32;

    pub fn image_pull_secrets(description: &'static str) -> Attribute {
        Attribute::list_nested(description, local_object_reference())
    }

    pub fn local_object_reference() -> Attributes {
        Attributes::new().with(
            "name",
            Attribute::string(
                "Name of the referent. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
            ),
        )
    }

    pub fn resources(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with(
                    "claims",
                    Attribute::list_nested(
                        "Claims lists the names of resources, defined in spec.resourceClaims, that are used by this container.",
                        Attributes::new().with(
                            "name",
                            Attribute::string(
                                "Name must match the name of one entry in pod.spec.resourceClaims of the Pod where this field is used.",
                            )
                            .required(),
                        ),
                    ),
                )
                .with(
                    "limits",
                    Attribute::map("Limits describes the maximum amount of compute resources allowed."),
                )
                .with(
                    "requests",
                    Attribute::map(
                        "Requests describes the minimum amount of compute resources required. If omitted, it defaults to Limits if that is explicitly specified.",
                    ),
                ),
        )
    }

    pub fn ports(description: &'static str) -> Attribute {
        Attribute::list_nested(
            description,
            Attributes::new()
                .with(
                    "container_port",
                    int32("Number of port to expose on the pod's IP address. This must be a valid port number, 0 < x < 65536.")
                        .required(),
                )
                .with(
                    "host_ip",
                    Attribute::string("What host IP to bind the external port to.")
                        .manifest_name("hostIP"),
                )
                .with(
                    "host_port",
                    int32("Number of port to expose on the host. If specified, this must be a valid port number, 0 < x < 65536."),
                )
                .with(
                    "name",
                    Attribute::string(
                        "If specified, this must be an IANA_SVC_NAME and unique within the pod. Each named port in a pod must have a unique name.",
                    ),
                )
                .with(
                    "protocol",
                    Attribute::string("Protocol for port. Must be UDP, TCP, or SCTP. Defaults to 'TCP'."),
                ),
        )
    }

    fn key_selector(description: &'static str, kind: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with("key", Attribute::string(kind).required())
                .with("name", Attribute::string("Name of the referent."))
                .with(
                    "optional",
                    Attribute::bool("Specify whether the referent or its key must be defined"),
                ),
        )
    }

    pub fn object_field_selector(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with(
                    "api_version",
                    Attribute::string(
                        "Version of the schema the FieldPath is written in terms of, defaults to 'v1'.",
                    ),
                )
                .with(
                    "field_path",
                    Attribute::string("Path of the field to select in the specified API version.")
                        .required(),
                ),
        )
    }

    pub fn resource_field_selector(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with(
                    "container_name",
                    Attribute::string("Container name: required for volumes, optional for env vars"),
                )
                .with(
                    "divisor",
                    Attribute::string(
                        "Specifies the output format of the exposed resources, defaults to '1'",
                    ),
                )
                .with("resource", Attribute::string("Required: resource to select").required()),
        )
    }

    pub fn env(description: &'static str) -> Attribute {
        Attribute::list_nested(
            description,
            Attributes::new()
                .with(
                    "name",
                    Attribute::string("Name of the environment variable. Must be a C_IDENTIFIER.")
                        .required(),
                )
                .with(
                    "value",
                    Attribute::string(
                        "Variable references $(VAR_NAME) are expanded using the previously defined environment variables in the container and any service environment variables.",
                    ),
                )
                .with(
                    "value_from",
                    Attribute::single_nested(
                        "Source for the environment variable's value. Cannot be used if value is not empty.",
                        Attributes::new()
                            .with(
                                "config_map_key_ref",
                                key_selector("Selects a key of a ConfigMap.", "The key to select."),
                            )
                            .with(
                                "field_ref",
                                object_field_selector(
                                    "Selects a field of the pod: supports metadata.name, metadata.namespace, metadata.labels, metadata.annotations, spec.nodeName, spec.serviceAccountName, status.hostIP, status.podIP, status.podIPs.",
                                ),
                            )
                            .with(
                                "resource_field_ref",
                                resource_field_selector(
                                    "Selects a resource of the container: only resources limits and requests are currently supported.",
                                ),
                            )
                            .with(
                                "secret_key_ref",
                                key_selector(
                                    "Selects a key of a secret in the pod's namespace",
                                    "The key of the secret to select from. Must be a valid secret key.",
                                ),
                            ),
                    ),
                ),
        )
    }

    fn exec_action() -> Attribute {
        Attribute::single_nested(
            "Exec specifies the action to take.",
            Attributes::new().with(
                "command",
                Attribute::list(
                    "Command is the command line to execute inside the container, the working directory for the command is root ('/') in the container's filesystem.",
                ),
            ),
        )
    }

    fn http_get_action() -> Attribute {
        Attribute::single_nested(
            "HTTPGet specifies the http request to perform.",
            Attributes::new()
                .with(
                    "host",
                    Attribute::string(
                        "Host name to connect to, defaults to the pod IP. You probably want to set 'Host' in httpHeaders instead.",
                    ),
                )
                .with(
                    "http_headers",
                    Attribute::list_nested(
                        "Custom headers to set in the request. HTTP allows repeated headers.",
                        Attributes::new()
                            .with(
                                "name",
                                Attribute::string(
                                    "The header field name. This will be canonicalized upon output, so case-variant names will be understood as the same header.",
                                )
                                .required(),
                            )
                            .with("value", Attribute::string("The header field value").required()),
                    ),
                )
                .with("path", Attribute::string("Path to access on the HTTP server."))
                .with(
                    "port",
                    Attribute::int_or_string(
                        "Name or number of the port to access on the container. Number must be in the range 1 to 65535. Name must be an IANA_SVC_NAME.",
                    )
                    .required(),
                )
                .with(
                    "scheme",
                    Attribute::string("Scheme to use for connecting to the host. Defaults to HTTP."),
                ),
        )
    }

    fn tcp_socket_action() -> Attribute {
        Attribute::single_nested(
            "TCPSocket specifies an action involving a TCP port.",
            Attributes::new()
                .with(
                    "host",
                    Attribute::string("Optional: Host name to connect to, defaults to the pod IP."),
                )
                .with(
                    "port",
                    Attribute::int_or_string(
                        "Number or name of the port to access on the container. Number must be in the range 1 to 65535. Name must be an IANA_SVC_NAME.",
                    )
                    .required(),
                ),
        )
    }

    pub fn probe(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with("exec", exec_action())
                .with(
                    "failure_threshold",
                    int32("Minimum consecutive failures for the probe to be considered failed after having succeeded. Defaults to 3. Minimum value is 1."),
                )
                .with(
                    "grpc",
                    Attribute::single_nested(
                        "GRPC specifies an action involving a GRPC port.",
                        Attributes::new()
                            .with(
                                "port",
                                int32("Port number of the gRPC service. Number must be in the range 1 to 65535.")
                                    .required(),
                            )
                            .with(
                                "service",
                                Attribute::string(
                                    "Service is the name of the service to place in the gRPC HealthCheckRequest. If this is not specified, the default behavior is defined by gRPC.",
                                ),
                            ),
                    ),
                )
                .with("http_get", http_get_action())
                .with(
                    "initial_delay_seconds",
                    int32("Number of seconds after the container has started before liveness probes are initiated."),
                )
                .with(
                    "period_seconds",
                    int32("How often (in seconds) to perform the probe. Default to 10 seconds. Minimum value is 1."),
                )
                .with(
                    "success_threshold",
                    int32("Minimum consecutive successes for the probe to be considered successful after having failed. Defaults to 1."),
                )
                .with("tcp_socket", tcp_socket_action())
                .with(
                    "termination_grace_period_seconds",
                    Attribute::int64(
                        "Optional duration in seconds the pod needs to terminate gracefully upon probe failure.",
                    ),
                )
                .with(
                    "timeout_seconds",
                    int32("Number of seconds after which the probe times out. Defaults to 1 second. Minimum value is 1."),
                ),
        )
    }

    fn lifecycle_handler(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with("exec", exec_action())
                .with("http_get", http_get_action())
                .with("tcp_socket", tcp_socket_action()),
        )
    }

    pub fn lifecycle(description: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with(
                    "post_start",
                    lifecycle_handler(
                        "PostStart is called immediately after a container is created. If the handler fails, the container is terminated and restarted according to its restart policy.",
                    ),
                )
                .with(
                    "pre_stop",
                    lifecycle_handler(
                        "PreStop is called immediately before a container is terminated due to an API request or management event such as liveness/startup probe failure, preemption, resource contention, etc.",
                    ),
                ),
        )
    }

    pub fn volume_mounts(description: &'static str) -> Attribute {
        Attribute::list_nested(
            description,
            Attributes::new()
                .with(
                    "mount_path",
                    Attribute::string(
                        "Path within the container at which the volume should be mounted. Must not contain ':'.",
                    )
                    .required(),
                )
                .with(
                    "mount_propagation",
                    Attribute::string(
                        "mountPropagation determines how mounts are propagated from the host to container and the other way around.",
                    ),
                )
                .with("name", Attribute::string("This must match the Name of a Volume.").required())
                .with(
                    "read_only",
                    Attribute::bool(
                        "Mounted read-only if true, read-write otherwise (false or unspecified). Defaults to false.",
                    ),
                )
                .with(
                    "sub_path",
                    Attribute::string(
                        "Path within the volume from which the container's volume should be mounted. Defaults to '' (volume's root).",
                    ),
                )
                .with(
                    "sub_path_expr",
                    Attribute::string(
                        "Expanded path within the volume from which the container's volume should be mounted. SubPathExpr and SubPath are mutually exclusive.",
                    ),
                ),
        )
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_container_port_host_ip() {
        let port = ContainerPort {
            container_port: 8080,
            host_ip: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&port).expect("serialize"),
            json!({ "containerPort": 8080, "hostIP": "0.0.0.0" })
        );
    }

    #[test]
    fn test_probe_omits_unset() {
        let probe = Probe {
            http_get: Some(HttpGetAction {
                path: Some("/healthz".to_owned()),
                port: IntOrString::from("http"),
                ..Default::default()
            }),
            period_seconds: Some(10),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&probe).expect("serialize"),
            json!({ "httpGet": { "path": "/healthz", "port": "http" }, "periodSeconds": 10 })
        );
    }

    #[test]
    fn test_env_var_from_secret() {
        let env: EnvVar = serde_json::from_value(json!({
            "name": "TOKEN",
            "valueFrom": { "secretKeyRef": { "key": "token", "name": "creds" } }
        }))
        .expect("deserialize");

        let selector = env
            .value_from
            .and_then(|source| source.secret_key_ref)
            .expect("secret ref");
        assert_eq!(selector.key, "token");
        assert_eq!(selector.name.as_deref(), Some("creds"));
        assert_eq!(selector.optional, None);
    }
}
