//!
//! # Metadata validators
//!
//! Checks shared by every manifest data source: object names, namespaces,
//! label and annotation maps. They follow the rules the API server applies
//! on admission so that a bad manifest fails at plan time.
//!
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use tfk8s_framework::{AttributePath, Diagnostics, Validator};

const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const QUALIFIED_NAME_MAX_LENGTH: usize = 63;
const LABEL_VALUE_MAX_LENGTH: usize = 63;
const TOTAL_ANNOTATION_SIZE_LIMIT: usize = 256 * 1024;

static DNS1123_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("dns label regex"));

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("dns subdomain regex")
});

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]$").expect("qualified name regex")
});

static LABEL_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^(([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9])?$").expect("label value regex")
});

/// comma separated list of resource quantities, e.g. `100Gi,50Gi`
pub(crate) static QUANTITY_LIST: Lazy<Regex> = Lazy::new(|| {
    const QUANTITY: &str = r"(\+|-)?(([0-9]+(\.[0-9]*)?)|(\.[0-9]+))(([KMGTPE]i)|[numkMGTPE]|([eE](\+|-)?(([0-9]+(\.[0-9]*)?)|(\.[0-9]+))))?";
    Regex::new(&format!("^({QUANTITY})(,({QUANTITY}))*$")).expect("quantity list regex")
});

pub fn name() -> Box<dyn Validator> {
    Box::new(NameValidator)
}

pub fn namespace() -> Box<dyn Validator> {
    Box::new(NamespaceValidator)
}

pub fn labels() -> Box<dyn Validator> {
    Box::new(LabelsValidator)
}

pub fn annotations() -> Box<dyn Validator> {
    Box::new(AnnotationsValidator)
}

/// error messages for a qualified name: `[prefix/]name`, with a DNS
/// subdomain as optional prefix
fn qualified_name_errors(value: &str) -> Vec<String> {
    let mut errors = vec![];
    let name = match value.split_once('/') {
        Some((prefix, name)) => {
            if prefix.is_empty() {
                errors.push("prefix part must be non-empty".to_owned());
            } else {
                errors.extend(
                    dns1123_subdomain_errors(prefix)
                        .into_iter()
                        .map(|msg| format!("prefix part {msg}")),
                );
            }
            name
        }
        None => value,
    };

    if name.is_empty() {
        errors.push("name part must be non-empty".to_owned());
    } else {
        if name.len() > QUALIFIED_NAME_MAX_LENGTH {
            errors.push(format!(
                "name part must be no more than {QUALIFIED_NAME_MAX_LENGTH} characters"
            ));
        }
        if !QUALIFIED_NAME.is_match(name) {
            errors.push("name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character".to_owned());
        }
    }
    errors
}

fn dns1123_subdomain_errors(value: &str) -> Vec<String> {
    let mut errors = vec![];
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errors.push(format!(
            "must be no more than {DNS1123_SUBDOMAIN_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        errors.push("must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character".to_owned());
    }
    errors
}

fn dns1123_label_errors(value: &str) -> Vec<String> {
    let mut errors = vec![];
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        errors.push(format!(
            "must be no more than {DNS1123_LABEL_MAX_LENGTH} characters"
        ));
    }
    if !DNS1123_LABEL.is_match(value) {
        errors.push("must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character".to_owned());
    }
    errors
}

fn label_value_errors(value: &str) -> Vec<String> {
    let mut errors = vec![];
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        errors.push(format!(
            "must be no more than {LABEL_VALUE_MAX_LENGTH} characters"
        ));
    }
    if !LABEL_VALUE.is_match(value) {
        errors.push("must be empty or consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character".to_owned());
    }
    errors
}

fn report(
    diags: &mut Diagnostics,
    path: &AttributePath,
    summary: &str,
    subject: &str,
    errors: Vec<String>,
) {
    for error in errors {
        diags.add_attribute_error(path, summary, format!("{subject} {error}"));
    }
}

#[derive(Debug)]
struct NameValidator;

impl Validator for NameValidator {
    fn description(&self) -> String {
        "value must be a valid DNS subdomain name".to_owned()
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        if let Some(name) = value.as_str() {
            report(
                diags,
                path,
                "Invalid Attribute Value",
                &format!("Attribute {path} value '{name}'"),
                dns1123_subdomain_errors(name),
            );
        }
    }
}

#[derive(Debug)]
struct NamespaceValidator;

impl Validator for NamespaceValidator {
    fn description(&self) -> String {
        "value must be a valid DNS label".to_owned()
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        if let Some(namespace) = value.as_str() {
            report(
                diags,
                path,
                "Invalid Attribute Value",
                &format!("Attribute {path} value '{namespace}'"),
                dns1123_label_errors(namespace),
            );
        }
    }
}

#[derive(Debug)]
struct LabelsValidator;

impl Validator for LabelsValidator {
    fn description(&self) -> String {
        "keys must be qualified names and values must be valid label values".to_owned()
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(labels) = value.as_object() else {
            return;
        };

        for (key, value) in labels {
            let entry = path.key(key.as_str());
            report(
                diags,
                &entry,
                "Invalid Label Key",
                &format!("Label key '{key}'"),
                qualified_name_errors(key),
            );
            if let Some(value) = value.as_str() {
                report(
                    diags,
                    &entry,
                    "Invalid Label Value",
                    &format!("Label value '{value}'"),
                    label_value_errors(value),
                );
            }
        }
    }
}

#[derive(Debug)]
struct AnnotationsValidator;

impl Validator for AnnotationsValidator {
    fn description(&self) -> String {
        "keys must be qualified names and the total size must not exceed 256KiB".to_owned()
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(annotations) = value.as_object() else {
            return;
        };

        let mut total_size = 0;
        for (key, value) in annotations {
            report(
                diags,
                &path.key(key.as_str()),
                "Invalid Annotation Key",
                &format!("Annotation key '{key}'"),
                qualified_name_errors(key),
            );
            total_size += key.len() + value.as_str().map(str::len).unwrap_or_default();
        }

        if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value",
                format!(
                    "Attribute {path} annotations size {total_size} must have at most {TOTAL_ANNOTATION_SIZE_LIMIT} bytes"
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {

    use serde_json::json;

    use tfk8s_framework::{AttributePath, Diagnostics, Validator};

    use super::*;

    fn check(validator: Box<dyn Validator>, path: &AttributePath, value: Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validator.validate(path, &value, &mut diags);
        diags
    }

    #[test]
    fn test_name() {
        let path = AttributePath::root().attribute("metadata").attribute("name");
        assert!(check(name(), &path, json!("thin-demo.fluid")).is_empty());
        assert!(check(name(), &path, json!("Thin")).has_error());
        assert!(check(name(), &path, json!("-thin")).has_error());
        assert!(check(name(), &path, json!("a".repeat(254))).has_error());
        assert!(check(name(), &path, json!("a".repeat(253))).is_empty());
    }

    #[test]
    fn test_namespace() {
        let path = AttributePath::root()
            .attribute("metadata")
            .attribute("namespace");
        assert!(check(namespace(), &path, json!("fluid-system")).is_empty());
        assert!(check(namespace(), &path, json!("fluid.system")).has_error());
        assert!(check(namespace(), &path, json!("a".repeat(64))).has_error());
    }

    #[test]
    fn test_labels() {
        let path = AttributePath::root()
            .attribute("metadata")
            .attribute("labels");
        let diags = check(
            labels(),
            &path,
            json!({
                "app.kubernetes.io/name": "fluid",
                "tier": "",
                "bad key!": "ok",
                "release": "-bad"
            }),
        );
        let errors: Vec<_> = diags.errors().collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].summary, "Invalid Label Key");
        assert_eq!(
            errors[0].path.as_ref().map(|p| p.to_string()).as_deref(),
            Some(r#"metadata.labels["bad key!"]"#)
        );
        assert_eq!(errors[1].summary, "Invalid Label Value");
    }

    #[test]
    fn test_qualified_name_prefix() {
        assert!(qualified_name_errors("fluid.io/owner").is_empty());
        assert!(!qualified_name_errors("/owner").is_empty());
        assert!(!qualified_name_errors("Fluid.IO/owner").is_empty());
        assert!(!qualified_name_errors("fluid.io/").is_empty());
    }

    #[test]
    fn test_annotations_size() {
        let path = AttributePath::root()
            .attribute("metadata")
            .attribute("annotations");
        assert!(check(annotations(), &path, json!({ "note": "small" })).is_empty());

        let diags = check(
            annotations(),
            &path,
            json!({ "note": "x".repeat(TOTAL_ANNOTATION_SIZE_LIMIT) }),
        );
        assert!(diags.has_error());
    }

    #[test]
    fn test_quantity_list() {
        assert!(QUANTITY_LIST.is_match("100Gi"));
        assert!(QUANTITY_LIST.is_match("100Gi,50Gi,1.5T"));
        assert!(!QUANTITY_LIST.is_match("100Gi,"));
        assert!(!QUANTITY_LIST.is_match("lots"));
    }
}
