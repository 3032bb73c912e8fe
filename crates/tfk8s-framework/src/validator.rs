//!
//! # Attribute validators
//!
//! Validators run after the value has been type checked against its
//! attribute, so a string validator only ever sees strings. Values of any
//! other shape are ignored.
//!
use std::fmt::Debug;

use regex::Regex;
use serde_json::Value;

use crate::{AttributePath, Diagnostics};

pub trait Validator: Debug + Send + Sync {
    /// plain text description, shown in schema output
    fn description(&self) -> String;

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics);
}

pub fn one_of(values: &'static [&'static str]) -> Box<dyn Validator> {
    Box::new(OneOf { values })
}

pub fn regex_matches(regex: Regex, message: &'static str) -> Box<dyn Validator> {
    Box::new(RegexMatches { regex, message })
}

pub fn length_at_least(min: usize) -> Box<dyn Validator> {
    Box::new(LengthAtLeast { min })
}

pub fn length_at_most(max: usize) -> Box<dyn Validator> {
    Box::new(LengthAtMost { max })
}

pub fn int64_at_least(min: i64) -> Box<dyn Validator> {
    Box::new(Int64Between { min, max: i64::MAX })
}

pub fn int64_between(min: i64, max: i64) -> Box<dyn Validator> {
    Box::new(Int64Between { min, max })
}

#[derive(Debug)]
struct OneOf {
    values: &'static [&'static str],
}

impl OneOf {
    fn quoted(&self) -> String {
        let quoted: Vec<String> = self.values.iter().map(|v| format!("{v:?}")).collect();
        format!("[{}]", quoted.join(" "))
    }
}

impl Validator for OneOf {
    fn description(&self) -> String {
        format!("value must be one of: {}", self.quoted())
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(s) = value.as_str() else {
            return;
        };
        if !self.values.contains(&s) {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value Match",
                format!("Attribute {path} {}, got: {s:?}", self.description()),
            );
        }
    }
}

#[derive(Debug)]
struct RegexMatches {
    regex: Regex,
    message: &'static str,
}

impl Validator for RegexMatches {
    fn description(&self) -> String {
        if self.message.is_empty() {
            format!("value must match regular expression '{}'", self.regex.as_str())
        } else {
            self.message.to_owned()
        }
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(s) = value.as_str() else {
            return;
        };
        if !self.regex.is_match(s) {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value Match",
                format!("Attribute {path} {}, got: {s:?}", self.description()),
            );
        }
    }
}

#[derive(Debug)]
struct LengthAtLeast {
    min: usize,
}

impl Validator for LengthAtLeast {
    fn description(&self) -> String {
        format!("string length must be at least {}", self.min)
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(s) = value.as_str() else {
            return;
        };
        let length = s.chars().count();
        if length < self.min {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value Length",
                format!("Attribute {path} {}, got: {length}", self.description()),
            );
        }
    }
}

#[derive(Debug)]
struct LengthAtMost {
    max: usize,
}

impl Validator for LengthAtMost {
    fn description(&self) -> String {
        format!("string length must be at most {}", self.max)
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(s) = value.as_str() else {
            return;
        };
        let length = s.chars().count();
        if length > self.max {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value Length",
                format!("Attribute {path} {}, got: {length}", self.description()),
            );
        }
    }
}

#[derive(Debug)]
struct Int64Between {
    min: i64,
    max: i64,
}

impl Validator for Int64Between {
    fn description(&self) -> String {
        if self.max == i64::MAX {
            format!("value must be at least {}", self.min)
        } else {
            format!("value must be between {} and {}", self.min, self.max)
        }
    }

    fn validate(&self, path: &AttributePath, value: &Value, diags: &mut Diagnostics) {
        let Some(n) = value.as_i64() else {
            return;
        };
        if n < self.min || n > self.max {
            diags.add_attribute_error(
                path,
                "Invalid Attribute Value",
                format!("Attribute {path} {}, got: {n}", self.description()),
            );
        }
    }
}

#[cfg(test)]
mod tests {

    use regex::Regex;
    use serde_json::json;

    use crate::{AttributePath, Diagnostics};

    use super::*;

    fn check(validator: &dyn Validator, value: serde_json::Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        validator.validate(&AttributePath::root().attribute("field"), &value, &mut diags);
        diags
    }

    #[test]
    fn test_one_of() {
        let validator = one_of(&["MEM", "SSD", "HDD"]);
        assert!(check(validator.as_ref(), json!("SSD")).is_empty());

        let diags = check(validator.as_ref(), json!("NVME"));
        assert!(diags.has_error());
        let diag = diags.iter().next().expect("diagnostic");
        assert_eq!(
            diag.detail,
            r#"Attribute field value must be one of: ["MEM" "SSD" "HDD"], got: "NVME""#
        );
    }

    #[test]
    fn test_one_of_accepts_empty_member() {
        let validator = one_of(&["HostNetwork", "ContainerNetwork", ""]);
        assert!(check(validator.as_ref(), json!("")).is_empty());
    }

    #[test]
    fn test_regex_matches() {
        let validator = regex_matches(Regex::new("^[0-9]+$").expect("regex"), "");
        assert!(check(validator.as_ref(), json!("123")).is_empty());
        assert!(check(validator.as_ref(), json!("12a")).has_error());
        assert_eq!(
            validator.description(),
            "value must match regular expression '^[0-9]+$'"
        );
    }

    #[test]
    fn test_length_bounds() {
        let at_least = length_at_least(1);
        assert!(check(at_least.as_ref(), json!("")).has_error());
        assert!(check(at_least.as_ref(), json!("a")).is_empty());

        let at_most = length_at_most(3);
        assert!(check(at_most.as_ref(), json!("abcd")).has_error());
        assert!(check(at_most.as_ref(), json!("abc")).is_empty());
    }

    #[test]
    fn test_int64_between() {
        let validator = int64_between(1, 65535);
        assert!(check(validator.as_ref(), json!(8080)).is_empty());
        assert!(check(validator.as_ref(), json!(0)).has_error());
        assert!(check(validator.as_ref(), json!(70000)).has_error());
        assert_eq!(int64_at_least(0).description(), "value must be at least 0");
    }

    #[test]
    fn test_ignores_other_shapes() {
        assert!(check(one_of(&["a"]).as_ref(), json!(1)).is_empty());
        assert!(check(int64_at_least(5).as_ref(), json!("1")).is_empty());
    }
}
