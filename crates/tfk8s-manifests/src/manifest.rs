//!
//! # Manifest envelope
//!
//! `apiVersion`, `kind` and `metadata` around a typed spec, and its YAML
//! rendering.
//!
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

use tfk8s_framework::validator::length_at_least;
use tfk8s_framework::{Attribute, Attributes};

use crate::ManifestError;
use crate::k8_types::Spec;
use crate::validators;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<S> {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    pub metadata: ManifestMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

impl<S> Manifest<S>
where
    S: Spec,
{
    pub fn new(metadata: ManifestMetadata, spec: Option<S>) -> Self {
        Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata,
            spec,
        }
    }

    /// overwrite `apiVersion` and `kind` with the CRD identity of `S`
    pub fn stamp(&mut self) {
        self.api_version = S::api_version();
        self.kind = S::kind();
    }
}

impl<S> Manifest<S>
where
    S: Serialize,
{
    /// Render as YAML with the keys of every mapping in lexical order.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        let mut value = serde_yaml::to_value(self)?;
        sort_keys(&mut value);
        Ok(serde_yaml::to_string(&value)?)
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestMetadata {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ManifestMetadata {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }
}

fn sort_keys(value: &mut YamlValue) {
    match value {
        YamlValue::Mapping(mapping) => {
            let mut entries: Vec<(YamlValue, YamlValue)> =
                std::mem::take(mapping).into_iter().collect();
            entries.sort_by(|(left, _), (right, _)| left.as_str().cmp(&right.as_str()));
            for (key, mut value) in entries {
                sort_keys(&mut value);
                mapping.insert(key, value);
            }
        }
        YamlValue::Sequence(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}

pub(crate) fn metadata_attributes() -> Attributes {
    Attributes::new()
        .with(
            "name",
            Attribute::string("Unique identifier for this object. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names")
                .required()
                .validator(length_at_least(1))
                .validator(validators::name()),
        )
        .with(
            "namespace",
            Attribute::string("Namespace of this object. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/namespaces/")
                .required()
                .validator(length_at_least(1))
                .validator(validators::namespace()),
        )
        .with(
            "labels",
            Attribute::map("Keys and values that can be used to organize and categorize objects. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/")
                .validator(validators::labels()),
        )
        .with(
            "annotations",
            Attribute::map("Unstructured key value map stored with a resource that may be set by external tools. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations/")
                .validator(validators::annotations()),
        )
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;

    use crate::fluid::ThinRuntimeSpec;

    use super::*;

    #[test]
    fn test_keys_sorted() {
        let mut metadata = ManifestMetadata::new("demo", "default");
        metadata.labels.insert("zone".to_owned(), "a".to_owned());
        metadata.labels.insert("app".to_owned(), "fluid".to_owned());
        let manifest = Manifest::new(
            metadata,
            Some(ThinRuntimeSpec {
                replicas: Some(2),
                profile_name: Some("nfs".to_owned()),
                ..Default::default()
            }),
        );

        assert_eq!(
            manifest.to_yaml().expect("yaml"),
            "apiVersion: data.fluid.io/v1alpha1
kind: ThinRuntime
metadata:
  labels:
    app: fluid
    zone: a
  name: demo
  namespace: default
spec:
  profileName: nfs
  replicas: 2
"
        );
    }

    #[test]
    fn test_omits_empty() {
        let manifest: Manifest<ThinRuntimeSpec> =
            Manifest::new(ManifestMetadata::new("demo", "default"), None);
        let yaml = manifest.to_yaml().expect("yaml");
        assert!(!yaml.contains("spec"));
        assert!(!yaml.contains("labels"));
        assert!(!yaml.contains("annotations"));
    }

    #[test]
    fn test_stamp() {
        let mut manifest: Manifest<ThinRuntimeSpec> =
            serde_json::from_str(r#"{"metadata":{"name":"demo","namespace":"default"}}"#)
                .expect("decode");
        assert_eq!(manifest.api_version, "");
        manifest.stamp();
        assert_eq!(manifest.api_version, "data.fluid.io/v1alpha1");
        assert_eq!(manifest.kind, "ThinRuntime");
    }
}
