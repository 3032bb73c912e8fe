//!
//! # Data source schema
//!
//! A schema is a tree of attributes keyed by their Terraform name. Each
//! attribute also knows the name the value takes in the rendered manifest,
//! which by default is the camelCase form of the Terraform name.
//!
mod translate;
mod validate;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::{AttributePath, Diagnostics, Validator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Required,
    Optional,
    /// set by the data source, never by configuration
    Computed,
}

#[derive(Debug)]
pub enum AttributeKind {
    /// `int_or_string` values are rendered as integers when they parse as one
    String { int_or_string: bool },
    Bool,
    Int64,
    /// list of strings
    List,
    /// map of strings
    Map,
    SingleNested(Attributes),
    ListNested(Attributes),
}

impl AttributeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Bool => "bool",
            Self::Int64 => "number",
            Self::List => "list of string",
            Self::Map => "map of string",
            Self::SingleNested(_) => "object",
            Self::ListNested(_) => "list of object",
        }
    }

    pub fn nested(&self) -> Option<&Attributes> {
        match self {
            Self::SingleNested(attributes) | Self::ListNested(attributes) => Some(attributes),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Attribute {
    kind: AttributeKind,
    presence: Presence,
    description: &'static str,
    manifest_name: Option<&'static str>,
    validators: Vec<Box<dyn Validator>>,
}

impl Attribute {
    fn new(kind: AttributeKind, description: &'static str) -> Self {
        Self {
            kind,
            presence: Presence::Optional,
            description,
            manifest_name: None,
            validators: vec![],
        }
    }

    pub fn string(description: &'static str) -> Self {
        Self::new(
            AttributeKind::String {
                int_or_string: false,
            },
            description,
        )
    }

    pub fn int_or_string(description: &'static str) -> Self {
        Self::new(
            AttributeKind::String {
                int_or_string: true,
            },
            description,
        )
    }

    pub fn bool(description: &'static str) -> Self {
        Self::new(AttributeKind::Bool, description)
    }

    pub fn int64(description: &'static str) -> Self {
        Self::new(AttributeKind::Int64, description)
    }

    pub fn list(description: &'static str) -> Self {
        Self::new(AttributeKind::List, description)
    }

    pub fn map(description: &'static str) -> Self {
        Self::new(AttributeKind::Map, description)
    }

    pub fn single_nested(description: &'static str, attributes: Attributes) -> Self {
        Self::new(AttributeKind::SingleNested(attributes), description)
    }

    pub fn list_nested(description: &'static str, attributes: Attributes) -> Self {
        Self::new(AttributeKind::ListNested(attributes), description)
    }

    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.presence = Presence::Computed;
        self
    }

    /// name of the field in the manifest when it is not the camelCase form
    pub fn manifest_name(mut self, name: &'static str) -> Self {
        self.manifest_name = Some(name);
        self
    }

    pub fn validator(mut self, validator: Box<dyn Validator>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    pub fn is_computed(&self) -> bool {
        self.presence == Presence::Computed
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    pub fn resolve_manifest_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self.manifest_name {
            Some(manifest_name) => Cow::Borrowed(manifest_name),
            None => camel_case(name),
        }
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let validators: Vec<String> = self.validators.iter().map(|v| v.description()).collect();

        let mut state = serializer.serialize_struct("Attribute", 5)?;
        state.serialize_field("type", self.kind.type_name())?;
        state.serialize_field("presence", &self.presence)?;
        state.serialize_field("description", self.description)?;
        if validators.is_empty() {
            state.skip_field("validators")?;
        } else {
            state.serialize_field("validators", &validators)?;
        }
        match self.kind.nested() {
            Some(nested) => state.serialize_field("attributes", nested)?,
            None => state.skip_field("attributes")?,
        }
        state.end()
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<&'static str, Attribute>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.0.insert(name, attribute);
        self
    }

    /// add every attribute of `other`, used for inlined structures
    pub fn merge(mut self, other: Attributes) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct Schema {
    description: &'static str,
    attributes: Attributes,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Attributes) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// check the configuration object against every attribute of the schema
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validate::validate_attributes(&self.attributes, &AttributePath::root(), config, &mut diags);
        trace!(errors = diags.errors().count(), "validated config");
        diags
    }

    /// rename configuration values to their manifest names, dropping nulls
    /// and computed attributes
    pub fn to_manifest(&self, config: &Value) -> Value {
        translate::translate_attributes(&self.attributes, config)
    }
}

/// `volume_claim_template` -> `volumeClaimTemplate`
pub fn camel_case(name: &str) -> Cow<'_, str> {
    if !name.contains('_') {
        return Cow::Borrowed(name);
    }

    let mut result = String::with_capacity(name.len());
    for (position, word) in name.split('_').enumerate() {
        if position == 0 {
            result.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("volume_claim_template"), "volumeClaimTemplate");
        assert_eq!(camel_case("mediumtype"), "mediumtype");
        assert_eq!(camel_case("api_version"), "apiVersion");
        assert_eq!(camel_case("tieredstore"), "tieredstore");
    }

    #[test]
    fn test_manifest_name_override() {
        let attribute = Attribute::string("Host IP").manifest_name("hostIP");
        assert_eq!(attribute.resolve_manifest_name("host_ip"), "hostIP");
        assert_eq!(
            Attribute::string("Port name").resolve_manifest_name("host_port"),
            "hostPort"
        );
    }

    #[test]
    fn test_serialize_schema() {
        let schema = Schema::new(
            "test",
            Attributes::new()
                .with("yaml", Attribute::string("rendered").computed())
                .with(
                    "metadata",
                    Attribute::single_nested(
                        "object metadata",
                        Attributes::new().with("name", Attribute::string("name").required()),
                    )
                    .required(),
                ),
        );

        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(
            value,
            json!({
                "description": "test",
                "attributes": {
                    "metadata": {
                        "type": "object",
                        "presence": "required",
                        "description": "object metadata",
                        "attributes": {
                            "name": {
                                "type": "string",
                                "presence": "required",
                                "description": "name"
                            }
                        }
                    },
                    "yaml": {
                        "type": "string",
                        "presence": "computed",
                        "description": "rendered"
                    }
                }
            })
        );
    }
}
