use std::borrow::Cow;

use serde_json::Value;

use crate::{AttributePath, Diagnostics};

use super::{Attribute, AttributeKind, Attributes};

pub(super) fn validate_attributes(
    attributes: &Attributes,
    path: &AttributePath,
    value: &Value,
    diags: &mut Diagnostics,
) {
    let Some(object) = value.as_object() else {
        if path.is_root() {
            diags.add_error(
                "Invalid configuration",
                "The configuration must be an object.",
            );
        } else {
            diags.add_attribute_error(
                path,
                "Incorrect attribute value type",
                format!("Inappropriate value for attribute \"{path}\": object required."),
            );
        }
        return;
    };

    for key in object.keys() {
        if !attributes.contains(key) {
            diags.add_attribute_error(
                &path.attribute(key.as_str()),
                "Unsupported argument",
                format!("An argument named \"{key}\" is not expected here."),
            );
        }
    }

    for (name, attribute) in attributes.iter() {
        let value = object.get(*name).unwrap_or(&Value::Null);
        validate_attribute(attribute, &path.attribute(*name), value, diags);
    }
}

fn validate_attribute(
    attribute: &Attribute,
    path: &AttributePath,
    value: &Value,
    diags: &mut Diagnostics,
) {
    if value.is_null() {
        if attribute.is_required() {
            diags.add_attribute_error(
                path,
                "Missing required argument",
                format!("The argument \"{path}\" is required, but no definition was found."),
            );
        }
        return;
    }

    if attribute.is_computed() {
        diags.add_attribute_error(
            path,
            "Invalid configuration",
            format!("\"{path}\" is a computed attribute and cannot be set in configuration."),
        );
        return;
    }

    if !check_type(attribute.kind(), path, value, diags) {
        return;
    }

    match attribute.kind() {
        AttributeKind::SingleNested(nested) => validate_attributes(nested, path, value, diags),
        AttributeKind::ListNested(nested) => {
            if let Some(items) = value.as_array() {
                for (index, item) in items.iter().enumerate() {
                    validate_attributes(nested, &path.index(index), item, diags);
                }
            }
        }
        _ => {}
    }

    // validators of an int-or-string see the number in its string form
    let value = match (attribute.kind(), value) {
        (AttributeKind::String { .. }, Value::Number(number)) => {
            Cow::Owned(Value::String(number.to_string()))
        }
        _ => Cow::Borrowed(value),
    };
    for validator in attribute.validators() {
        validator.validate(path, &value, diags);
    }
}

/// returns false when the value has the wrong shape, after reporting it
fn check_type(
    kind: &AttributeKind,
    path: &AttributePath,
    value: &Value,
    diags: &mut Diagnostics,
) -> bool {
    let matches = match kind {
        AttributeKind::String { int_or_string } => {
            value.is_string() || (*int_or_string && value.is_i64())
        }
        AttributeKind::Bool => value.is_boolean(),
        AttributeKind::Int64 => value.is_i64(),
        AttributeKind::SingleNested(_) => value.is_object(),
        AttributeKind::ListNested(_) => value.is_array(),
        AttributeKind::List => {
            let Some(items) = value.as_array() else {
                return mismatch(kind, path, diags);
            };
            let mut valid = true;
            for (index, item) in items.iter().enumerate() {
                if !item.is_string() {
                    element_mismatch(&path.index(index), diags);
                    valid = false;
                }
            }
            return valid;
        }
        AttributeKind::Map => {
            let Some(entries) = value.as_object() else {
                return mismatch(kind, path, diags);
            };
            let mut valid = true;
            for (key, item) in entries {
                if !item.is_string() {
                    element_mismatch(&path.key(key.as_str()), diags);
                    valid = false;
                }
            }
            return valid;
        }
    };

    if matches {
        true
    } else {
        mismatch(kind, path, diags)
    }
}

fn mismatch(kind: &AttributeKind, path: &AttributePath, diags: &mut Diagnostics) -> bool {
    diags.add_attribute_error(
        path,
        "Incorrect attribute value type",
        format!(
            "Inappropriate value for attribute \"{path}\": {} required.",
            kind.type_name()
        ),
    );
    false
}

fn element_mismatch(path: &AttributePath, diags: &mut Diagnostics) {
    diags.add_attribute_error(
        path,
        "Incorrect attribute value type",
        format!("Inappropriate value for element \"{path}\": string required."),
    );
}

#[cfg(test)]
mod tests {

    use serde_json::json;

    use crate::validator::one_of;
    use crate::{Attribute, Attributes, Diagnostics, Schema};

    fn schema() -> Schema {
        Schema::new(
            "test",
            Attributes::new()
                .with("yaml", Attribute::string("rendered").computed())
                .with(
                    "metadata",
                    Attribute::single_nested(
                        "metadata",
                        Attributes::new()
                            .with("name", Attribute::string("name").required())
                            .with("labels", Attribute::map("labels")),
                    )
                    .required(),
                )
                .with(
                    "spec",
                    Attribute::single_nested(
                        "spec",
                        Attributes::new()
                            .with("replicas", Attribute::int64("replicas"))
                            .with("command", Attribute::list("command"))
                            .with(
                                "levels",
                                Attribute::list_nested(
                                    "levels",
                                    Attributes::new().with(
                                        "mediumtype",
                                        Attribute::string("medium")
                                            .required()
                                            .validator(one_of(&["MEM", "SSD", "HDD"])),
                                    ),
                                ),
                            ),
                    ),
                ),
        )
    }

    fn paths(diags: &Diagnostics) -> Vec<String> {
        diags
            .errors()
            .filter_map(|d| d.path.as_ref().map(|p| p.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_config() {
        let diags = schema().validate_config(&json!({
            "metadata": { "name": "test", "labels": { "app": "fluid" } },
            "spec": {
                "replicas": 2,
                "command": ["mount"],
                "levels": [ { "mediumtype": "MEM" } ]
            }
        }));
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn test_config_must_be_object() {
        let diags = schema().validate_config(&json!("metadata"));
        assert!(diags.has_error());
        assert!(paths(&diags).is_empty());
    }

    #[test]
    fn test_missing_required() {
        let diags = schema().validate_config(&json!({ "metadata": { "labels": null } }));
        assert_eq!(paths(&diags), vec!["metadata.name"]);

        let diags = schema().validate_config(&json!({}));
        assert_eq!(paths(&diags), vec!["metadata"]);
    }

    #[test]
    fn test_unsupported_argument() {
        let diags = schema().validate_config(&json!({
            "metadata": { "name": "test", "uid": "1234" }
        }));
        assert_eq!(paths(&diags), vec!["metadata.uid"]);
        assert_eq!(
            diags.errors().next().map(|d| d.summary.as_str()),
            Some("Unsupported argument")
        );
    }

    #[test]
    fn test_computed_not_configurable() {
        let diags = schema().validate_config(&json!({
            "yaml": "kind: ThinRuntime",
            "metadata": { "name": "test" }
        }));
        assert_eq!(paths(&diags), vec!["yaml"]);
    }

    #[test]
    fn test_type_mismatch() {
        let diags = schema().validate_config(&json!({
            "metadata": { "name": 1, "labels": { "app": 2 } },
            "spec": { "replicas": "two", "command": ["a", 1] }
        }));
        assert_eq!(
            paths(&diags),
            vec![
                r#"metadata.labels["app"]"#,
                "metadata.name",
                "spec.command[1]",
                "spec.replicas"
            ]
        );
    }

    #[test]
    fn test_nested_list_validators() {
        let diags = schema().validate_config(&json!({
            "metadata": { "name": "test" },
            "spec": { "levels": [ { "mediumtype": "MEM" }, { "mediumtype": "NVME" }, {} ] }
        }));
        assert_eq!(
            paths(&diags),
            vec!["spec.levels[1].mediumtype", "spec.levels[2].mediumtype"]
        );
    }

    #[test]
    fn test_int_or_string_accepts_number() {
        let schema = Schema::new(
            "ports",
            Attributes::new()
                .with(
                    "port",
                    Attribute::int_or_string("port").validator(one_of(&["8080", "http"])),
                )
                .with("host", Attribute::string("host")),
        );

        assert!(schema.validate_config(&json!({ "port": 8080 })).is_empty());
        assert!(schema.validate_config(&json!({ "port": "http" })).is_empty());
        for config in [
            json!({ "port": 9090 }),
            json!({ "port": true }),
            json!({ "host": 1 }),
        ] {
            assert_eq!(paths(&schema.validate_config(&config)).len(), 1, "{config}");
        }
    }
}
