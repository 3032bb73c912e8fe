use serde_json::{Map, Value};

use super::{Attribute, AttributeKind, Attributes};

pub(super) fn translate_attributes(attributes: &Attributes, value: &Value) -> Value {
    let mut manifest = Map::new();

    if let Some(object) = value.as_object() {
        for (name, attribute) in attributes.iter() {
            if attribute.is_computed() {
                continue;
            }
            match object.get(*name) {
                None | Some(Value::Null) => {}
                Some(value) => {
                    manifest.insert(
                        attribute.resolve_manifest_name(name).into_owned(),
                        translate_attribute(attribute, value),
                    );
                }
            }
        }
    }

    Value::Object(manifest)
}

fn translate_attribute(attribute: &Attribute, value: &Value) -> Value {
    match attribute.kind() {
        AttributeKind::String {
            int_or_string: true,
        } => int_or_string(value),
        AttributeKind::SingleNested(nested) => translate_attributes(nested, value),
        AttributeKind::ListNested(nested) => Value::Array(
            value
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .map(|item| translate_attributes(nested, item))
                        .collect()
                })
                .unwrap_or_default(),
        ),
        _ => value.clone(),
    }
}

/// only canonical decimals that fit an int32 become numbers, `"0080"` and
/// `"3000000000"` stay strings
fn int_or_string(value: &Value) -> Value {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => return value.clone(),
    };
    match text.parse::<i32>() {
        Ok(number) if number.to_string() == text => Value::from(number),
        _ => Value::String(text),
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{Attribute, Attributes, Schema};

    fn schema() -> Schema {
        Schema::new(
            "test",
            Attributes::new()
                .with("yaml", Attribute::string("rendered").computed())
                .with(
                    "spec",
                    Attribute::single_nested(
                        "spec",
                        Attributes::new()
                            .with("disable_prometheus", Attribute::bool("disable"))
                            .with("host_ip", Attribute::string("host ip").manifest_name("hostIP"))
                            .with(
                                "ports",
                                Attribute::list_nested(
                                    "ports",
                                    Attributes::new()
                                        .with("port", Attribute::int_or_string("port"))
                                        .with("node_selector", Attribute::map("selector")),
                                ),
                            ),
                    ),
                ),
        )
    }

    #[test]
    fn test_renames_and_drops_nulls() {
        let manifest = schema().to_manifest(&json!({
            "yaml": null,
            "spec": {
                "disable_prometheus": true,
                "host_ip": "10.0.0.1",
                "ports": [
                    { "port": "8080", "node_selector": { "disk": "ssd" } },
                    { "port": "http", "node_selector": null }
                ]
            }
        }));

        assert_eq!(
            manifest,
            json!({
                "spec": {
                    "disablePrometheus": true,
                    "hostIP": "10.0.0.1",
                    "ports": [
                        { "port": 8080, "nodeSelector": { "disk": "ssd" } },
                        { "port": "http" }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_int_or_string_canonical_int32_only() {
        let manifest = schema().to_manifest(&json!({
            "spec": {
                "ports": [
                    { "port": "0080" },
                    { "port": "+80" },
                    { "port": "3000000000" },
                    { "port": "-1" },
                    { "port": 8080 },
                    { "port": 3000000000_i64 }
                ]
            }
        }));

        assert_eq!(
            manifest,
            json!({
                "spec": {
                    "ports": [
                        { "port": "0080" },
                        { "port": "+80" },
                        { "port": "3000000000" },
                        { "port": -1 },
                        { "port": 8080 },
                        { "port": "3000000000" }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_computed_never_rendered() {
        let manifest = schema().to_manifest(&json!({ "yaml": "kind: X" }));
        assert_eq!(manifest, json!({}));
    }
}
