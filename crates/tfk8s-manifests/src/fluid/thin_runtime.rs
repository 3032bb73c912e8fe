//!
//! # ThinRuntime
//!
//! Runtime that plugs a general storage system into Fluid through a FUSE
//! container built from a ThinRuntimeProfile.
//!
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use tfk8s_framework::{Attribute, Attributes, Schema};
use tfk8s_framework::validator::{length_at_least, one_of, regex_matches};

use crate::core::container_schema::{
    env, image_pull_secrets, lifecycle, ports, probe, resources, volume_mounts,
};
use crate::core::volume_schema::{volume_source, volumes};
use crate::core::{
    ContainerPort, EnvVar, Lifecycle, LocalObjectReference, Probe, Quantity, ResourceRequirements,
    Volume, VolumeMount, VolumeSource, int32,
};
use crate::datasource::{ManifestSpec, manifest_schema};
use crate::k8_types::{Crd, CrdNames, DefaultHeader, Spec, Status};
use crate::validators::QUANTITY_LIST;

use super::{GROUP, V1ALPHA1};

const THIN_RUNTIME_API: Crd = Crd {
    group: GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "ThinRuntime",
        plural: "thinruntimes",
        singular: "thinruntime",
    },
};

impl Spec for ThinRuntimeSpec {
    type Status = ThinRuntimeStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &THIN_RUNTIME_API
    }
}

impl Status for ThinRuntimeStatus {}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThinRuntimeSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<ThinCompTemplateSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse: Option<ThinFuseSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tieredstore: Option<TieredStore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_as: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_prometheus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<RuntimeManagement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secrets: Option<Vec<LocalObjectReference>>,
}

/// Observed state of the runtime, reported by the Fluid controllers.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThinRuntimeStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse_phase: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum NetworkMode {
    HostNetwork,
    ContainerNetwork,
    #[serde(rename = "")]
    NotSpecified,
}

impl NetworkMode {
    pub const VALUES: &'static [&'static str] = &["HostNetwork", "ContainerNetwork", ""];
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum CleanPolicy {
    OnDemand,
    OnRuntimeDeleted,
}

impl CleanPolicy {
    pub const VALUES: &'static [&'static str] = &["OnDemand", "OnRuntimeDeleted"];
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum MediumType {
    #[serde(rename = "MEM")]
    Memory,
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
}

impl MediumType {
    pub const VALUES: &'static [&'static str] = &["MEM", "SSD", "HDD"];
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum VolumeType {
    #[serde(rename = "hostPath")]
    HostPath,
    #[serde(rename = "emptyDir")]
    EmptyDir,
}

impl VolumeType {
    pub const VALUES: &'static [&'static str] = &["hostPath", "emptyDir"];
}

/// Worker component of the runtime.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThinCompTemplateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secrets: Option<Vec<LocalObjectReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<ContainerPort>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<NetworkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThinFuseSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_secrets: Option<Vec<LocalObjectReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<Vec<EnvVar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<ContainerPort>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_policy: Option<CleanPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<NetworkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<VolumeMount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_metadata: Option<PodMetadata>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TieredStore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<Level>>,
}

/// One cache tier. `mediumtype` has no sensible default, so a level
/// without it fails to decode.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub mediumtype: MediumType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_source: Option<VolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
}

impl Level {
    pub fn new(mediumtype: MediumType) -> Self {
        Self {
            mediumtype,
            volume_type: None,
            volume_source: None,
            path: None,
            quota: None,
            quota_list: None,
            high: None,
            low: None,
        }
    }
}

/// Identity the runtime containers run as.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub uid: i64,
    pub gid: i64,
    pub user: String,
    pub group: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeManagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_cache_policy: Option<CleanCachePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_sync_policy: Option<MetadataSyncPolicy>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CleanCachePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retry_attempts: Option<i32>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataSyncPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_sync: Option<bool>,
}

impl ManifestSpec for ThinRuntimeSpec {
    const DATA_SOURCE_SUFFIX: &'static str = "_data_fluid_io_thin_runtime_v1alpha1_manifest";

    const DESCRIPTION: &'static str = "ThinRuntime is the Schema for the thin runtimes API";

    const SPEC_DESCRIPTION: &'static str = "ThinRuntimeSpec defines the desired state of ThinRuntime";

    fn schema() -> &'static Schema {
        static SCHEMA: Lazy<Schema> = Lazy::new(manifest_schema::<ThinRuntimeSpec>);
        &SCHEMA
    }

    fn spec_attributes() -> Attributes {
        Attributes::new()
            .with(
                "profile_name",
                Attribute::string("The specific runtime profile name, empty value is used for handling datasets which mount another dataset"),
            )
            .with("worker", worker())
            .with("fuse", fuse())
            .with("tieredstore", tieredstore())
            .with(
                "volumes",
                volumes("Volumes is the list of Kubernetes volumes that can be mounted by runtime components and/or fuse."),
            )
            .with("replicas", int32("The replicas of the worker, need to be specified"))
            .with(
                "run_as",
                Attribute::single_nested(
                    "Manage the user to run Runtime",
                    Attributes::new()
                        .with(
                            "uid",
                            Attribute::int64("The uid to run the alluxio runtime").required(),
                        )
                        .with(
                            "gid",
                            Attribute::int64("The gid to run the alluxio runtime").required(),
                        )
                        .with(
                            "user",
                            Attribute::string("The user name to run the alluxio runtime").required(),
                        )
                        .with(
                            "group",
                            Attribute::string("The group name to run the alluxio runtime")
                                .required(),
                        ),
                ),
            )
            .with(
                "disable_prometheus",
                Attribute::bool("Disable monitoring for Runtime Prometheus is enabled by default"),
            )
            .with("management", management())
            .with(
                "image_pull_secrets",
                image_pull_secrets("ImagePullSecrets that will be used to pull images"),
            )
    }
}

fn network_mode() -> Attribute {
    Attribute::string(
        "NetworkMode specifies the network mode of the component. Default is HostNetwork",
    )
    .validator(one_of(NetworkMode::VALUES))
}

fn worker() -> Attribute {
    Attribute::single_nested(
        "The component spec of thin runtime",
        Attributes::new()
            .with("image", Attribute::string("Image for thinRuntime fuse"))
            .with("image_tag", Attribute::string("Image for thinRuntime fuse"))
            .with(
                "image_pull_policy",
                Attribute::string("One of the three policies: 'Always', 'IfNotPresent', 'Never'"),
            )
            .with(
                "image_pull_secrets",
                image_pull_secrets("ImagePullSecrets that will be used to pull images"),
            )
            .with(
                "replicas",
                int32("Replicas is the desired number of replicas of the given template."),
            )
            .with(
                "resources",
                resources("Resources that will be requested by thinRuntime component."),
            )
            .with("ports", ports("Ports used thinRuntime"))
            .with("env", env("Environment variables that will be used by thinRuntime component."))
            .with("enabled", Attribute::bool("Enabled or Disabled for the components."))
            .with(
                "node_selector",
                Attribute::map("NodeSelector is a selector which must be true for the pod to fit on a node"),
            )
            .with("network_mode", network_mode())
            .with(
                "liveness_probe",
                probe("livenessProbe of thin fuse pod"),
            )
            .with(
                "readiness_probe",
                probe("readinessProbe of thin fuse pod"),
            )
            .with(
                "volume_mounts",
                volume_mounts("VolumeMounts specifies the volumes listed in '.spec.volumes' to mount into the thinruntime component's filesystem."),
            ),
    )
}

fn fuse() -> Attribute {
    Attribute::single_nested(
        "The component spec of thinRuntime",
        Attributes::new()
            .with("image", Attribute::string("Image for thinRuntime fuse"))
            .with("image_tag", Attribute::string("Image for thinRuntime fuse"))
            .with(
                "image_pull_policy",
                Attribute::string("One of the three policies: 'Always', 'IfNotPresent', 'Never'"),
            )
            .with(
                "image_pull_secrets",
                image_pull_secrets("ImagePullSecrets that will be used to pull images"),
            )
            .with("env", env("Environment variables that will be used by thinRuntime Fuse"))
            .with("command", Attribute::list("Command that will be passed to thinRuntime Fuse"))
            .with("args", Attribute::list("Arguments that will be passed to thinRuntime Fuse"))
            .with(
                "options",
                Attribute::map("Options configurable options of FUSE client, performance parameters usually. will be merged with Dataset.spec.mounts.options into fuse pod."),
            )
            .with(
                "resources",
                resources("Resources that will be requested by thinRuntime Fuse."),
            )
            .with("ports", ports("Ports used thinRuntime"))
            .with("liveness_probe", probe("livenessProbe of thin fuse pod"))
            .with("readiness_probe", probe("readinessProbe of thin fuse pod"))
            .with(
                "clean_policy",
                Attribute::string("CleanPolicy decides when to clean thinRuntime Fuse pods. Currently Fluid supports two policies: OnDemand and OnRuntimeDeleted OnDemand cleans fuse pod once th fuse pod on some node is not needed OnRuntimeDeleted cleans fuse pod only when the cache runtime is deleted Defaults to OnRuntimeDeleted")
                    .validator(one_of(CleanPolicy::VALUES)),
            )
            .with(
                "node_selector",
                Attribute::map("NodeSelector is a selector which must be true for the fuse client to fit on a node, this option only effect when global is enabled"),
            )
            .with("network_mode", network_mode())
            .with(
                "volume_mounts",
                volume_mounts("VolumeMounts specifies the volumes listed in '.spec.volumes' to mount into the thinruntime component's filesystem."),
            )
            .with(
                "lifecycle",
                lifecycle("Lifecycle describes actions that the management system should take in response to container lifecycle events."),
            )
            .with(
                "pod_metadata",
                Attribute::single_nested(
                    "PodMetadata defines labels and annotations that will be propagated to Thin's fuse pods",
                    Attributes::new()
                        .with("labels", Attribute::map("Labels are labels of pod specification"))
                        .with(
                            "annotations",
                            Attribute::map("Annotations are annotations of pod specification"),
                        ),
                ),
            ),
    )
}

fn tieredstore() -> Attribute {
    Attribute::single_nested(
        "Tiered storage used by ThinRuntime",
        Attributes::new().with(
            "levels",
            Attribute::list_nested(
                "configurations for multiple tiers",
                Attributes::new()
                    .with(
                        "mediumtype",
                        Attribute::string("Medium Type of the tier. One of the three types: 'MEM', 'SSD', 'HDD'")
                            .required()
                            .validator(one_of(MediumType::VALUES)),
                    )
                    .with(
                        "volume_type",
                        Attribute::string("VolumeType is the volume type of the tier. Should be one of the three types: 'hostPath', 'emptyDir' and 'volumeTemplate'. If not set, defaults to hostPath.")
                            .validator(one_of(VolumeType::VALUES)),
                    )
                    .with(
                        "volume_source",
                        Attribute::single_nested(
                            "VolumeSource is the volume source of the tier. It follows the form of corev1.VolumeSource. For now, only emptyDir is supported.",
                            volume_source(),
                        ),
                    )
                    .with(
                        "path",
                        Attribute::string("File paths to be used for the tier. Multiple paths are supported. Multiple paths should be separated with comma. For example: '/mnt/cache1,/mnt/cache2'.")
                            .validator(length_at_least(1)),
                    )
                    .with("quota", Attribute::string("Quota for the whole tier. (e.g. 100Gi) Please note that if there're multiple paths used for this tierstore, the quota will be equally divided into these paths. If you'd like to set quota for each, path, see QuotaList for more information."))
                    .with(
                        "quota_list",
                        Attribute::string("QuotaList are quotas used to set quota on multiple paths. Quotas should be separated with comma. Quotas in this list will be set to paths with the same order in Path. For example, with Path defined with '/mnt/cache1,/mnt/cache2' and QuotaList set to '100Gi, 50Gi', then we get 100GiB cache storage under '/mnt/cache1' and 50GiB under '/mnt/cache2'. Also note that num of quotas must be consistent with the num of paths defined in Path.")
                            .validator(regex_matches(Regex::clone(&QUANTITY_LIST), "")),
                    )
                    .with(
                        "high",
                        Attribute::string("Ratio of high watermark of the tier (e.g. 0.9)"),
                    )
                    .with(
                        "low",
                        Attribute::string("Ratio of low watermark of the tier (e.g. 0.7)"),
                    ),
            ),
        ),
    )
}

fn management() -> Attribute {
    Attribute::single_nested(
        "RuntimeManagement defines policies when managing the runtime",
        Attributes::new()
            .with(
                "clean_cache_policy",
                Attribute::single_nested(
                    "CleanCachePolicy defines cleanCache Policy",
                    Attributes::new()
                        .with(
                            "grace_period_seconds",
                            int32("Optional duration in seconds the cache needs to clean gracefully. May be decreased in delete runtime request."),
                        )
                        .with(
                            "max_retry_attempts",
                            int32("Optional max retry Attempts when cleanCache function returns an error after execution, runtime attempts to run it three more times by default. With Maximum Retry Attempts, you can customize the maximum number of retries. This gives you the option to continue processing retries."),
                        ),
                ),
            )
            .with(
                "metadata_sync_policy",
                Attribute::single_nested(
                    "MetadataSyncPolicy defines how to sync metadata",
                    Attributes::new().with(
                        "auto_sync",
                        Attribute::bool("AutoSync enables automatic metadata sync when setting up a runtime. If not set, it defaults to true."),
                    ),
                ),
            ),
    )
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use tfk8s_framework::{AttributePath, Diagnostics};

    use crate::k8_types::Spec;

    use super::*;

    #[test]
    fn test_crd_identity() {
        assert_eq!(ThinRuntimeSpec::api_version(), "data.fluid.io/v1alpha1");
        assert_eq!(ThinRuntimeSpec::kind(), "ThinRuntime");
        assert_eq!(ThinRuntimeSpec::metadata().names.plural, "thinruntimes");
    }

    #[test]
    fn test_decode_spec() {
        let spec: ThinRuntimeSpec = serde_json::from_value(json!({
            "profileName": "nfs-profile",
            "fuse": {
                "networkMode": "",
                "cleanPolicy": "OnDemand",
                "podMetadata": { "labels": { "team": "data" } }
            },
            "tieredstore": {
                "levels": [ { "mediumtype": "SSD", "path": "/mnt/cache", "quota": "10Gi" } ]
            },
            "runAs": { "uid": 1000, "gid": 1000, "user": "fluid", "group": "fluid" }
        }))
        .expect("decode");

        let fuse = spec.fuse.expect("fuse");
        assert_eq!(fuse.network_mode, Some(NetworkMode::NotSpecified));
        assert_eq!(fuse.clean_policy, Some(CleanPolicy::OnDemand));

        let levels = spec
            .tieredstore
            .and_then(|store| store.levels)
            .expect("levels");
        assert_eq!(levels[0].mediumtype, MediumType::Ssd);
        assert_eq!(levels[0].volume_type, None);
        assert_eq!(spec.run_as.map(|user| user.uid), Some(1000));
    }

    #[test]
    fn test_level_requires_mediumtype() {
        let result: Result<Level, _> = serde_json::from_value(json!({ "path": "/mnt" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_level() {
        let mut level = Level::new(MediumType::Memory);
        level.quota_list = Some("1Gi,2Gi".to_owned());
        assert_eq!(
            serde_json::to_value(&level).expect("encode"),
            json!({ "mediumtype": "MEM", "quotaList": "1Gi,2Gi" })
        );
    }

    fn validate(spec: serde_json::Value) -> Diagnostics {
        Schema::new("test", ThinRuntimeSpec::spec_attributes()).validate_config(&spec)
    }

    #[test]
    fn test_mediumtype_one_of() {
        let diags = validate(json!({
            "tieredstore": { "levels": [ { "mediumtype": "NVME" } ] }
        }));
        let error = diags.errors().next().expect("error");
        assert_eq!(error.summary, "Invalid Attribute Value Match");
        assert_eq!(
            error.path,
            Some(
                AttributePath::root()
                    .attribute("tieredstore")
                    .attribute("levels")
                    .index(0)
                    .attribute("mediumtype")
            )
        );
    }

    #[test]
    fn test_quota_list_and_path() {
        assert!(!validate(json!({
            "tieredstore": { "levels": [ { "mediumtype": "HDD", "path": "/a,/b", "quota_list": "100Gi,50Gi" } ] }
        }))
        .has_error());

        assert!(validate(json!({
            "tieredstore": { "levels": [ { "mediumtype": "HDD", "quota_list": "100Gi;50Gi" } ] }
        }))
        .has_error());

        assert!(validate(json!({
            "tieredstore": { "levels": [ { "mediumtype": "HDD", "path": "" } ] }
        }))
        .has_error());
    }

    #[test]
    fn test_run_as_all_required() {
        let diags = validate(json!({ "run_as": { "uid": 0, "gid": 0, "user": "root" } }));
        let error = diags.errors().next().expect("error");
        assert_eq!(error.summary, "Missing required argument");
    }

    #[test]
    fn test_network_mode_one_of() {
        assert!(!validate(json!({ "worker": { "network_mode": "" } })).has_error());
        assert!(validate(json!({ "worker": { "network_mode": "Bridge" } })).has_error());
    }
}
