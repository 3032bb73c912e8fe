//!
//! Volumes and every volume source a pod can mount.
//!
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    LocalObjectReference, ObjectFieldSelector, Quantity, ResourceFieldSelector,
    ResourceRequirements,
};

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    pub name: String,
    #[serde(flatten)]
    pub source: VolumeSource,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_elastic_block_store: Option<AwsElasticBlockStoreVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_disk: Option<AzureDiskVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azure_file: Option<AzureFileVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cephfs: Option<CephFsVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinder: Option<CinderVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<ConfigMapVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csi: Option<CsiVolumeSource>,
    #[serde(rename = "downwardAPI", skip_serializing_if = "Option::is_none")]
    pub downward_api: Option<DownwardApiVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<EmptyDirVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<EphemeralVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fc: Option<FcVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_volume: Option<FlexVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flocker: Option<FlockerVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gce_persistent_disk: Option<GcePersistentDiskVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<GitRepoVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glusterfs: Option<GlusterfsVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<HostPathVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iscsi: Option<IscsiVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nfs: Option<NfsVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photon_persistent_disk: Option<PhotonPersistentDiskVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portworx_volume: Option<PortworxVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected: Option<ProjectedVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quobyte: Option<QuobyteVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbd: Option<RbdVolumeSource>,
    #[serde(rename = "scaleIO", skip_serializing_if = "Option::is_none")]
    pub scale_io: Option<ScaleIoVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storageos: Option<StorageOsVolumeSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsphere_volume: Option<VsphereVirtualDiskVolumeSource>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsElasticBlockStoreVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "volumeID")]
    pub volume_id: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AzureDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching_mode: Option<String>,
    pub disk_name: String,
    #[serde(rename = "diskURI")]
    pub disk_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AzureFileVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    pub secret_name: String,
    pub share_name: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CephFsVolumeSource {
    pub monitors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CinderVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
    #[serde(rename = "volumeID")]
    pub volume_id: String,
}

/// Maps a key of a ConfigMap or Secret to a path in the volume.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyToPath {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
    pub path: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigMapVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CsiVolumeSource {
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_publish_secret_ref: Option<LocalObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_attributes: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DownwardApiVolumeFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_ref: Option<ObjectFieldSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_field_ref: Option<ResourceFieldSelector>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DownwardApiVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DownwardApiVolumeFile>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmptyDirVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<Quantity>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EphemeralVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<PersistentVolumeClaimTemplate>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EmbeddedObjectMeta>,
    pub spec: PersistentVolumeClaimSpec,
}

/// Metadata that may be set on an object embedded in another one.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedObjectMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<TypedLocalObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_ref: Option<TypedObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TypedLocalObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_group: Option<String>,
    pub kind: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TypedObjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_group: Option<String>,
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_expressions: Option<Vec<LabelSelectorRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelSelectorRequirement {
    pub key: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FcVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lun: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "targetWWNs", skip_serializing_if = "Option::is_none")]
    pub target_wwns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wwids: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlexVolumeSource {
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FlockerVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(rename = "datasetUUID", skip_serializing_if = "Option::is_none")]
    pub dataset_uuid: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GcePersistentDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,
    pub pd_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GitRepoVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    pub repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GlusterfsVolumeSource {
    pub endpoints: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HostPathVolumeSource {
    pub path: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IscsiVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chap_auth_discovery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chap_auth_session: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator_name: Option<String>,
    pub iqn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iscsi_interface: Option<String>,
    pub lun: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
    pub target_portal: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NfsVolumeSource {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    pub server: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimVolumeSource {
    pub claim_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotonPersistentDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(rename = "pdID")]
    pub pd_id: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortworxVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "volumeID")]
    pub volume_id: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectedVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<VolumeProjection>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_map: Option<KeyProjection>,
    #[serde(rename = "downwardAPI", skip_serializing_if = "Option::is_none")]
    pub downward_api: Option<DownwardApiProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<KeyProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_token: Option<ServiceAccountTokenProjection>,
}

/// Projection of a ConfigMap or a Secret.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DownwardApiProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DownwardApiVolumeFile>>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountTokenProjection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_seconds: Option<i64>,
    pub path: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuobyteVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    pub registry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub volume: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RbdVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyring: Option<String>,
    pub monitors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleIoVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    pub gateway: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    pub secret_ref: LocalObjectReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_pool: Option<String>,
    pub system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<KeyToPath>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageOsVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<LocalObjectReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_namespace: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VsphereVirtualDiskVolumeSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(rename = "storagePolicyID", skip_serializing_if = "Option::is_none")]
    pub storage_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_policy_name: Option<String>,
    pub volume_path: String,
}

pub(crate) mod volume_schema {

    use tfk8s_framework::{Attribute, Attributes};

    use crate::core::container_schema::{
        local_object_reference, object_field_selector, resource_field_selector,
    };
    use crate::core::int32;

    const FS_TYPE: &str = "fsType is the filesystem type to mount. Must be a filesystem type supported by the host operating system. Ex. 'ext4', 'xfs', 'ntfs'.";
    const READ_ONLY: &str = "readOnly here will force the ReadOnly setting in VolumeMounts. Defaults to false.";
    const DEFAULT_MODE: &str = "defaultMode is optional: mode bits used to set permissions on created files by default. Must be an octal value between 0000 and 0777 or a decimal value between 0 and 511.";

    fn secret_ref(description: &'static str) -> Attribute {
        Attribute::single_nested(description, local_object_reference())
    }

    fn key_to_path(description: &'static str) -> Attribute {
        Attribute::list_nested(
            description,
            Attributes::new()
                .with("key", Attribute::string("key is the key to project.").required())
                .with(
                    "mode",
                    int32("mode is Optional: mode bits used to set permissions on this file."),
                )
                .with(
                    "path",
                    Attribute::string(
                        "path is the relative path of the file to map the key to. May not be an absolute path. May not contain the path element '..'.",
                    )
                    .required(),
                ),
        )
    }

    fn downward_api_items() -> Attribute {
        Attribute::list_nested(
            "Items is a list of downward API volume file",
            Attributes::new()
                .with(
                    "field_ref",
                    object_field_selector(
                        "Required: Selects a field of the pod: only annotations, labels, name and namespace are supported.",
                    ),
                )
                .with(
                    "mode",
                    int32("Optional: mode bits used to set permissions on this file, must be an octal value between 0000 and 0777 or a decimal value between 0 and 511."),
                )
                .with(
                    "path",
                    Attribute::string(
                        "Required: Path is the relative path name of the file to be created. Must not be absolute or contain the '..' path.",
                    )
                    .required(),
                )
                .with(
                    "resource_field_ref",
                    resource_field_selector(
                        "Selects a resource of the container: only resources limits and requests (limits.cpu, limits.memory, requests.cpu and requests.memory) are currently supported.",
                    ),
                ),
        )
    }

    fn key_projection(description: &'static str, kind: &'static str) -> Attribute {
        Attribute::single_nested(
            description,
            Attributes::new()
                .with("items", key_to_path(kind))
                .with("name", Attribute::string("Name of the referent."))
                .with(
                    "optional",
                    Attribute::bool("optional specify whether the referent or its keys must be defined"),
                ),
        )
    }

    fn persistent_volume_claim_spec() -> Attribute {
        Attribute::single_nested(
            "The specification for the PersistentVolumeClaim. The entire content is copied unchanged into the PVC that gets created from this template.",
            Attributes::new()
                .with(
                    "access_modes",
                    Attribute::list("accessModes contains the desired access modes the volume should have."),
                )
                .with(
                    "data_source",
                    Attribute::single_nested(
                        "dataSource field can be used to specify either an existing VolumeSnapshot object, an existing PVC or an existing custom resource that implements data population.",
                        Attributes::new()
                            .with(
                                "api_group",
                                Attribute::string("APIGroup is the group for the resource being referenced."),
                            )
                            .with(
                                "kind",
                                Attribute::string("Kind is the type of resource being referenced").required(),
                            )
                            .with(
                                "name",
                                Attribute::string("Name is the name of resource being referenced").required(),
                            ),
                    ),
                )
                .with(
                    "data_source_ref",
                    Attribute::single_nested(
                        "dataSourceRef specifies the object from which to populate the volume with data, if a non-empty volume is desired.",
                        Attributes::new()
                            .with(
                                "api_group",
                                Attribute::string("APIGroup is the group for the resource being referenced."),
                            )
                            .with(
                                "kind",
                                Attribute::string("Kind is the type of resource being referenced").required(),
                            )
                            .with(
                                "name",
                                Attribute::string("Name is the name of resource being referenced").required(),
                            )
                            .with(
                                "namespace",
                                Attribute::string("Namespace is the namespace of resource being referenced."),
                            ),
                    ),
                )
                .with(
                    "resources",
                    Attribute::single_nested(
                        "resources represents the minimum resources the volume should have.",
                        Attributes::new()
                            .with(
                                "limits",
                                Attribute::map("Limits describes the maximum amount of compute resources allowed."),
                            )
                            .with(
                                "requests",
                                Attribute::map("Requests describes the minimum amount of compute resources required."),
                            ),
                    ),
                )
                .with(
                    "selector",
                    Attribute::single_nested(
                        "selector is a label query over volumes to consider for binding.",
                        Attributes::new()
                            .with(
                                "match_expressions",
                                Attribute::list_nested(
                                    "matchExpressions is a list of label selector requirements. The requirements are ANDed.",
                                    Attributes::new()
                                        .with(
                                            "key",
                                            Attribute::string("key is the label key that the selector applies to.")
                                                .required(),
                                        )
                                        .with(
                                            "operator",
                                            Attribute::string(
                                                "operator represents a key's relationship to a set of values. Valid operators are In, NotIn, Exists and DoesNotExist.",
                                            )
                                            .required(),
                                        )
                                        .with(
                                            "values",
                                            Attribute::list(
                                                "values is an array of string values. If the operator is In or NotIn, the values array must be non-empty.",
                                            ),
                                        ),
                                ),
                            )
                            .with(
                                "match_labels",
                                Attribute::map("matchLabels is a map of {key,value} pairs."),
                            ),
                    ),
                )
                .with(
                    "storage_class_name",
                    Attribute::string("storageClassName is the name of the StorageClass required by the claim."),
                )
                .with(
                    "volume_mode",
                    Attribute::string(
                        "volumeMode defines what type of volume is required by the claim. Value of Filesystem is implied when not included in claim spec.",
                    ),
                )
                .with(
                    "volume_name",
                    Attribute::string("volumeName is the binding reference to the PersistentVolume backing this claim."),
                ),
        )
        .required()
    }

    fn ephemeral() -> Attribute {
        Attribute::single_nested(
            "ephemeral represents a volume that is handled by a cluster storage driver.",
            Attributes::new().with(
                "volume_claim_template",
                Attribute::single_nested(
                    "Will be used to create a stand-alone PVC to provision the volume. The pod in which this EphemeralVolumeSource is embedded will be the owner of the PVC.",
                    Attributes::new()
                        .with(
                            "metadata",
                            Attribute::single_nested(
                                "May contain labels and annotations that will be copied into the PVC when creating it.",
                                Attributes::new()
                                    .with("annotations", Attribute::map("Annotations of the claim."))
                                    .with("finalizers", Attribute::list("Finalizers of the claim."))
                                    .with("labels", Attribute::map("Labels of the claim."))
                                    .with("name", Attribute::string("Name of the claim."))
                                    .with("namespace", Attribute::string("Namespace of the claim.")),
                            ),
                        )
                        .with("spec", persistent_volume_claim_spec()),
                ),
            ),
        )
    }

    fn projected() -> Attribute {
        Attribute::single_nested(
            "projected items for all in one resources secrets, configmaps, and downward API",
            Attributes::new()
                .with("default_mode", int32(DEFAULT_MODE))
                .with(
                    "sources",
                    Attribute::list_nested(
                        "sources is the list of volume projections",
                        Attributes::new()
                            .with(
                                "config_map",
                                key_projection(
                                    "configMap information about the configMap data to project",
                                    "items if unspecified, each key-value pair in the Data field of the referenced ConfigMap will be projected into the volume as a file whose name is the key and content is the value.",
                                ),
                            )
                            .with(
                                "downward_api",
                                Attribute::single_nested(
                                    "downwardAPI information about the downwardAPI data to project",
                                    Attributes::new().with("items", downward_api_items()),
                                )
                                .manifest_name("downwardAPI"),
                            )
                            .with(
                                "secret",
                                key_projection(
                                    "secret information about the secret data to project",
                                    "items if unspecified, each key-value pair in the Data field of the referenced Secret will be projected into the volume as a file whose name is the key and content is the value.",
                                ),
                            )
                            .with(
                                "service_account_token",
                                Attribute::single_nested(
                                    "serviceAccountToken is information about the serviceAccountToken data to project",
                                    Attributes::new()
                                        .with(
                                            "audience",
                                            Attribute::string(
                                                "audience is the intended audience of the token. Defaults to the identifier of the apiserver.",
                                            ),
                                        )
                                        .with(
                                            "expiration_seconds",
                                            Attribute::int64(
                                                "expirationSeconds is the requested duration of validity of the service account token. Defaults to 1 hour and must be at least 10 minutes.",
                                            ),
                                        )
                                        .with(
                                            "path",
                                            Attribute::string(
                                                "path is the path relative to the mount point of the file to project the token into.",
                                            )
                                            .required(),
                                        ),
                                ),
                            ),
                    ),
                ),
        )
    }

    /// every volume source, the attributes a `Volume` inlines next to its name
    pub fn volume_source() -> Attributes {
        Attributes::new()
            .with(
                "aws_elastic_block_store",
                Attribute::single_nested(
                    "awsElasticBlockStore represents an AWS Disk resource that is attached to a kubelet's host machine and then exposed to the pod.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "partition",
                            int32("partition is the partition in the volume that you want to mount. If omitted, the default is to mount by volume name."),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "volume_id",
                            Attribute::string("volumeID is unique ID of the persistent disk resource in AWS (Amazon EBS volume).")
                                .required()
                                .manifest_name("volumeID"),
                        ),
                ),
            )
            .with(
                "azure_disk",
                Attribute::single_nested(
                    "azureDisk represents an Azure Data Disk mount on the host and bind mount to the pod.",
                    Attributes::new()
                        .with(
                            "caching_mode",
                            Attribute::string("cachingMode is the Host Caching mode: None, Read Only, Read Write."),
                        )
                        .with(
                            "disk_name",
                            Attribute::string("diskName is the Name of the data disk in the blob storage").required(),
                        )
                        .with(
                            "disk_uri",
                            Attribute::string("diskURI is the URI of data disk in the blob storage")
                                .required()
                                .manifest_name("diskURI"),
                        )
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "kind",
                            Attribute::string(
                                "kind expected values are Shared: multiple blob disks per storage account, Dedicated: single blob disk per storage account, Managed: azure managed data disk.",
                            ),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY)),
                ),
            )
            .with(
                "azure_file",
                Attribute::single_nested(
                    "azureFile represents an Azure File Service mount on the host and bind mount to the pod.",
                    Attributes::new()
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_name",
                            Attribute::string(
                                "secretName is the  name of secret that contains Azure Storage Account Name and Key",
                            )
                            .required(),
                        )
                        .with("share_name", Attribute::string("shareName is the azure share Name").required()),
                ),
            )
            .with(
                "cephfs",
                Attribute::single_nested(
                    "cephFS represents a Ceph FS mount on the host that shares a pod's lifetime",
                    Attributes::new()
                        .with(
                            "monitors",
                            Attribute::list("monitors is Required: Monitors is a collection of Ceph monitors").required(),
                        )
                        .with(
                            "path",
                            Attribute::string(
                                "path is Optional: Used as the mounted root, rather than the full Ceph tree, default is /",
                            ),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_file",
                            Attribute::string(
                                "secretFile is Optional: SecretFile is the path to key ring for User, default is /etc/ceph/user.secret",
                            ),
                        )
                        .with(
                            "secret_ref",
                            secret_ref("secretRef is Optional: SecretRef is reference to the authentication secret for User, default is empty."),
                        )
                        .with(
                            "user",
                            Attribute::string("user is optional: User is the rados user name, default is admin"),
                        ),
                ),
            )
            .with(
                "cinder",
                Attribute::single_nested(
                    "cinder represents a cinder volume attached and mounted on kubelets host machine.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref("secretRef is optional: points to a secret object containing parameters used to connect to OpenStack."),
                        )
                        .with(
                            "volume_id",
                            Attribute::string("volumeID used to identify the volume in cinder.")
                                .required()
                                .manifest_name("volumeID"),
                        ),
                ),
            )
            .with(
                "config_map",
                Attribute::single_nested(
                    "configMap represents a configMap that should populate this volume",
                    Attributes::new()
                        .with("default_mode", int32(DEFAULT_MODE))
                        .with(
                            "items",
                            key_to_path(
                                "items if unspecified, each key-value pair in the Data field of the referenced ConfigMap will be projected into the volume as a file whose name is the key and content is the value.",
                            ),
                        )
                        .with("name", Attribute::string("Name of the referent."))
                        .with(
                            "optional",
                            Attribute::bool("optional specify whether the ConfigMap or its keys must be defined"),
                        ),
                ),
            )
            .with(
                "csi",
                Attribute::single_nested(
                    "csi (Container Storage Interface) represents ephemeral storage that is handled by certain external CSI drivers (Beta feature).",
                    Attributes::new()
                        .with(
                            "driver",
                            Attribute::string(
                                "driver is the name of the CSI driver that handles this volume. Consult with your admin for the correct name as registered in the cluster.",
                            )
                            .required(),
                        )
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "node_publish_secret_ref",
                            secret_ref(
                                "nodePublishSecretRef is a reference to the secret object containing sensitive information to pass to the CSI driver to complete the CSI NodePublishVolume and NodeUnpublishVolume calls.",
                            ),
                        )
                        .with(
                            "read_only",
                            Attribute::bool("readOnly specifies a read-only configuration for the volume. Defaults to false (read/write)."),
                        )
                        .with(
                            "volume_attributes",
                            Attribute::map(
                                "volumeAttributes stores driver-specific properties that are passed to the CSI driver.",
                            ),
                        ),
                ),
            )
            .with(
                "downward_api",
                Attribute::single_nested(
                    "downwardAPI represents downward API about the pod that should populate this volume",
                    Attributes::new()
                        .with("default_mode", int32(DEFAULT_MODE))
                        .with("items", downward_api_items()),
                )
                .manifest_name("downwardAPI"),
            )
            .with(
                "empty_dir",
                Attribute::single_nested(
                    "emptyDir represents a temporary directory that shares a pod's lifetime.",
                    Attributes::new()
                        .with(
                            "medium",
                            Attribute::string(
                                "medium represents what type of storage medium should back this directory. The default is '' which means to use the node's default medium. Must be an empty string (default) or Memory.",
                            ),
                        )
                        .with(
                            "size_limit",
                            Attribute::string("sizeLimit is the total amount of local storage required for this EmptyDir volume."),
                        ),
                ),
            )
            .with("ephemeral", ephemeral())
            .with(
                "fc",
                Attribute::single_nested(
                    "fc represents a Fibre Channel resource that is attached to a kubelet's host machine and then exposed to the pod.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with("lun", int32("lun is Optional: FC target lun number"))
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "target_ww_ns",
                            Attribute::list("targetWWNs is Optional: FC target worldwide names (WWNs)")
                                .manifest_name("targetWWNs"),
                        )
                        .with(
                            "wwids",
                            Attribute::list(
                                "wwids Optional: FC volume world wide identifiers (wwids). Either wwids or combination of targetWWNs and lun must be set, but not both simultaneously.",
                            ),
                        ),
                ),
            )
            .with(
                "flex_volume",
                Attribute::single_nested(
                    "flexVolume represents a generic volume resource that is provisioned/attached using an exec based plugin.",
                    Attributes::new()
                        .with(
                            "driver",
                            Attribute::string("driver is the name of the driver to use for this volume.").required(),
                        )
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "options",
                            Attribute::map("options is Optional: this field holds extra command options if any."),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref(
                                "secretRef is Optional: secretRef is reference to the secret object containing sensitive information to pass to the plugin scripts.",
                            ),
                        ),
                ),
            )
            .with(
                "flocker",
                Attribute::single_nested(
                    "flocker represents a Flocker volume attached to a kubelet's host machine. This depends on the Flocker control service being running",
                    Attributes::new()
                        .with(
                            "dataset_name",
                            Attribute::string(
                                "datasetName is Name of the dataset stored as metadata -> name on the dataset for Flocker should be considered as deprecated",
                            ),
                        )
                        .with(
                            "dataset_uuid",
                            Attribute::string("datasetUUID is the UUID of the dataset. This is unique identifier of a Flocker dataset")
                                .manifest_name("datasetUUID"),
                        ),
                ),
            )
            .with(
                "gce_persistent_disk",
                Attribute::single_nested(
                    "gcePersistentDisk represents a GCE Disk resource that is attached to a kubelet's host machine and then exposed to the pod.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "partition",
                            int32("partition is the partition in the volume that you want to mount. If omitted, the default is to mount by volume name."),
                        )
                        .with(
                            "pd_name",
                            Attribute::string("pdName is unique name of the PD resource in GCE. Used to identify the disk in GCE.")
                                .required(),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY)),
                ),
            )
            .with(
                "git_repo",
                Attribute::single_nested(
                    "gitRepo represents a git repository at a particular revision. DEPRECATED: GitRepo is deprecated.",
                    Attributes::new()
                        .with(
                            "directory",
                            Attribute::string(
                                "directory is the target directory name. Must not contain or start with '..'. If '.' is supplied, the volume directory will be the git repository.",
                            ),
                        )
                        .with("repository", Attribute::string("repository is the URL").required())
                        .with(
                            "revision",
                            Attribute::string("revision is the commit hash for the specified revision."),
                        ),
                ),
            )
            .with(
                "glusterfs",
                Attribute::single_nested(
                    "glusterfs represents a Glusterfs mount on the host that shares a pod's lifetime.",
                    Attributes::new()
                        .with(
                            "endpoints",
                            Attribute::string("endpoints is the endpoint name that details Glusterfs topology.").required(),
                        )
                        .with("path", Attribute::string("path is the Glusterfs volume path.").required())
                        .with("read_only", Attribute::bool(READ_ONLY)),
                ),
            )
            .with(
                "host_path",
                Attribute::single_nested(
                    "hostPath represents a pre-existing file or directory on the host machine that is directly exposed to the container.",
                    Attributes::new()
                        .with(
                            "path",
                            Attribute::string(
                                "path of the directory on the host. If the path is a symlink, it will follow the link to the real path.",
                            )
                            .required(),
                        )
                        .with(
                            "type",
                            Attribute::string("type for HostPath Volume Defaults to ''"),
                        ),
                ),
            )
            .with(
                "iscsi",
                Attribute::single_nested(
                    "iscsi represents an ISCSI Disk resource that is attached to a kubelet's host machine and then exposed to the pod.",
                    Attributes::new()
                        .with(
                            "chap_auth_discovery",
                            Attribute::bool("chapAuthDiscovery defines whether support iSCSI Discovery CHAP authentication"),
                        )
                        .with(
                            "chap_auth_session",
                            Attribute::bool("chapAuthSession defines whether support iSCSI Session CHAP authentication"),
                        )
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "initiator_name",
                            Attribute::string(
                                "initiatorName is the custom iSCSI Initiator Name. If initiatorName is specified with iscsiInterface simultaneously, new iSCSI interface <target portal>:<volume name> will be created for the connection.",
                            ),
                        )
                        .with("iqn", Attribute::string("iqn is the target iSCSI Qualified Name.").required())
                        .with(
                            "iscsi_interface",
                            Attribute::string(
                                "iscsiInterface is the interface Name that uses an iSCSI transport. Defaults to 'default' (tcp).",
                            ),
                        )
                        .with("lun", int32("lun represents iSCSI Target Lun number.").required())
                        .with(
                            "portals",
                            Attribute::list(
                                "portals is the iSCSI Target Portal List. The portal is either an IP or ip_addr:port if the port is other than default (typically TCP ports 860 and 3260).",
                            ),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref("secretRef is the CHAP Secret for iSCSI target and initiator authentication"),
                        )
                        .with(
                            "target_portal",
                            Attribute::string(
                                "targetPortal is iSCSI Target Portal. The Portal is either an IP or ip_addr:port if the port is other than default (typically TCP ports 860 and 3260).",
                            )
                            .required(),
                        ),
                ),
            )
            .with(
                "nfs",
                Attribute::single_nested(
                    "nfs represents an NFS mount on the host that shares a pod's lifetime",
                    Attributes::new()
                        .with("path", Attribute::string("path that is exported by the NFS server.").required())
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "server",
                            Attribute::string("server is the hostname or IP address of the NFS server.").required(),
                        ),
                ),
            )
            .with(
                "persistent_volume_claim",
                Attribute::single_nested(
                    "persistentVolumeClaimVolumeSource represents a reference to a PersistentVolumeClaim in the same namespace.",
                    Attributes::new()
                        .with(
                            "claim_name",
                            Attribute::string(
                                "claimName is the name of a PersistentVolumeClaim in the same namespace as the pod using this volume.",
                            )
                            .required(),
                        )
                        .with(
                            "read_only",
                            Attribute::bool("readOnly Will force the ReadOnly setting in VolumeMounts. Default false."),
                        ),
                ),
            )
            .with(
                "photon_persistent_disk",
                Attribute::single_nested(
                    "photonPersistentDisk represents a PhotonController persistent disk attached and mounted on kubelets host machine",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "pd_id",
                            Attribute::string("pdID is the ID that identifies Photon Controller persistent disk")
                                .required()
                                .manifest_name("pdID"),
                        ),
                ),
            )
            .with(
                "portworx_volume",
                Attribute::single_nested(
                    "portworxVolume represents a portworx volume attached and mounted on kubelets host machine",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "volume_id",
                            Attribute::string("volumeID uniquely identifies a Portworx volume")
                                .required()
                                .manifest_name("volumeID"),
                        ),
                ),
            )
            .with("projected", projected())
            .with(
                "quobyte",
                Attribute::single_nested(
                    "quobyte represents a Quobyte mount on the host that shares a pod's lifetime",
                    Attributes::new()
                        .with(
                            "group",
                            Attribute::string("group to map volume access to Default is no group"),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "registry",
                            Attribute::string(
                                "registry represents a single or multiple Quobyte Registry services specified as a string as host:port pair (multiple entries are separated with commas) which acts as the central registry for volumes",
                            )
                            .required(),
                        )
                        .with(
                            "tenant",
                            Attribute::string(
                                "tenant owning the given Quobyte volume in the Backend Used with dynamically provisioned Quobyte volumes, value is set by the plugin",
                            ),
                        )
                        .with(
                            "user",
                            Attribute::string("user to map volume access to Defaults to serivceaccount user"),
                        )
                        .with(
                            "volume",
                            Attribute::string(
                                "volume is a string that references an already created Quobyte volume by name.",
                            )
                            .required(),
                        ),
                ),
            )
            .with(
                "rbd",
                Attribute::single_nested(
                    "rbd represents a Rados Block Device mount on the host that shares a pod's lifetime.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with("image", Attribute::string("image is the rados image name.").required())
                        .with(
                            "keyring",
                            Attribute::string(
                                "keyring is the path to key ring for RBDUser. Default is /etc/ceph/keyring.",
                            ),
                        )
                        .with(
                            "monitors",
                            Attribute::list("monitors is a collection of Ceph monitors.").required(),
                        )
                        .with(
                            "pool",
                            Attribute::string("pool is the rados pool name. Default is rbd."),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref(
                                "secretRef is name of the authentication secret for RBDUser. If provided overrides keyring. Default is nil.",
                            ),
                        )
                        .with(
                            "user",
                            Attribute::string("user is the rados user name. Default is admin."),
                        ),
                ),
            )
            .with(
                "scale_io",
                Attribute::single_nested(
                    "scaleIO represents a ScaleIO persistent volume attached and mounted on Kubernetes nodes.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "gateway",
                            Attribute::string("gateway is the host address of the ScaleIO API Gateway.").required(),
                        )
                        .with(
                            "protection_domain",
                            Attribute::string(
                                "protectionDomain is the name of the ScaleIO Protection Domain for the configured storage.",
                            ),
                        )
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref(
                                "secretRef references to the secret for ScaleIO user and other sensitive information. If this is not provided, Login operation will fail.",
                            )
                            .required(),
                        )
                        .with(
                            "ssl_enabled",
                            Attribute::bool("sslEnabled Flag enable/disable SSL communication with Gateway, default false"),
                        )
                        .with(
                            "storage_mode",
                            Attribute::string(
                                "storageMode indicates whether the storage for a volume should be ThickProvisioned or ThinProvisioned. Default is ThinProvisioned.",
                            ),
                        )
                        .with(
                            "storage_pool",
                            Attribute::string(
                                "storagePool is the ScaleIO Storage Pool associated with the protection domain.",
                            ),
                        )
                        .with(
                            "system",
                            Attribute::string(
                                "system is the name of the storage system as configured in ScaleIO.",
                            )
                            .required(),
                        )
                        .with(
                            "volume_name",
                            Attribute::string(
                                "volumeName is the name of a volume already created in the ScaleIO system that is associated with this volume source.",
                            ),
                        ),
                )
                .manifest_name("scaleIO"),
            )
            .with(
                "secret",
                Attribute::single_nested(
                    "secret represents a secret that should populate this volume.",
                    Attributes::new()
                        .with("default_mode", int32(DEFAULT_MODE))
                        .with(
                            "items",
                            key_to_path(
                                "items If unspecified, each key-value pair in the Data field of the referenced Secret will be projected into the volume as a file whose name is the key and content is the value.",
                            ),
                        )
                        .with(
                            "optional",
                            Attribute::bool("optional field specify whether the Secret or its keys must be defined"),
                        )
                        .with(
                            "secret_name",
                            Attribute::string(
                                "secretName is the name of the secret in the pod's namespace to use.",
                            ),
                        ),
                ),
            )
            .with(
                "storageos",
                Attribute::single_nested(
                    "storageOS represents a StorageOS volume attached and mounted on Kubernetes nodes.",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with("read_only", Attribute::bool(READ_ONLY))
                        .with(
                            "secret_ref",
                            secret_ref(
                                "secretRef specifies the secret to use for obtaining the StorageOS API credentials. If not specified, default values will be attempted.",
                            ),
                        )
                        .with(
                            "volume_name",
                            Attribute::string(
                                "volumeName is the human-readable name of the StorageOS volume. Volume names are only unique within a namespace.",
                            ),
                        )
                        .with(
                            "volume_namespace",
                            Attribute::string(
                                "volumeNamespace specifies the scope of the volume within StorageOS. If no namespace is specified then the Pod's namespace will be used.",
                            ),
                        ),
                ),
            )
            .with(
                "vsphere_volume",
                Attribute::single_nested(
                    "vsphereVolume represents a vSphere volume attached and mounted on kubelets host machine",
                    Attributes::new()
                        .with("fs_type", Attribute::string(FS_TYPE))
                        .with(
                            "storage_policy_id",
                            Attribute::string(
                                "storagePolicyID is the storage Policy Based Management (SPBM) profile ID associated with the StoragePolicyName.",
                            )
                            .manifest_name("storagePolicyID"),
                        )
                        .with(
                            "storage_policy_name",
                            Attribute::string(
                                "storagePolicyName is the storage Policy Based Management (SPBM) profile name.",
                            ),
                        )
                        .with(
                            "volume_path",
                            Attribute::string("volumePath is the path that identifies vSphere volume vmdk").required(),
                        ),
                ),
            )
    }

    pub fn volumes(description: &'static str) -> Attribute {
        Attribute::list_nested(
            description,
            Attributes::new()
                .with(
                    "name",
                    Attribute::string(
                        "name of the volume. Must be a DNS_LABEL and unique within the pod. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
                    )
                    .required(),
                )
                .merge(volume_source()),
        )
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_volume_inlines_source() {
        let volume = Volume {
            name: "cache".to_owned(),
            source: VolumeSource {
                host_path: Some(HostPathVolumeSource {
                    path: "/mnt/cache".to_owned(),
                    type_: Some("DirectoryOrCreate".to_owned()),
                }),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&volume).expect("serialize"),
            json!({
                "name": "cache",
                "hostPath": { "path": "/mnt/cache", "type": "DirectoryOrCreate" }
            })
        );
    }

    #[test]
    fn test_irregular_field_names() {
        let source: VolumeSource = serde_json::from_value(json!({
            "downwardAPI": { "items": [ { "path": "labels", "fieldRef": { "fieldPath": "metadata.labels" } } ] },
            "scaleIO": { "gateway": "gw", "system": "sys", "secretRef": { "name": "s" } },
            "fc": { "targetWWNs": ["500a0982991b8dc5"], "lun": 2 }
        }))
        .expect("deserialize");

        let items = source
            .downward_api
            .as_ref()
            .and_then(|d| d.items.as_ref())
            .expect("items");
        assert_eq!(items[0].path, "labels");
        assert_eq!(
            source.scale_io.as_ref().map(|s| s.system.as_str()),
            Some("sys")
        );
        assert_eq!(
            source.fc.as_ref().and_then(|fc| fc.target_wwns.clone()),
            Some(vec!["500a0982991b8dc5".to_owned()])
        );
    }
}
