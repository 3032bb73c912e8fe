//!
//! # Kubernetes core types
//!
//! The subset of the `core/v1` API that custom resources embed: container
//! settings, probes and volumes. Each module carries the Terraform attribute
//! declarations for its types next to the types themselves.
//!
mod container;
mod volume;

pub use self::container::*;
pub use self::volume::*;

use std::fmt;

use serde::{Deserialize, Serialize};

use tfk8s_framework::Attribute;
use tfk8s_framework::validator::int64_between;

/// A port or similar value that is either a number or a name.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl Default for IntOrString {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for IntOrString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Resource amount such as `500m` or `10Gi`, kept in its textual form.
pub type Quantity = String;

/// int32 field of the Kubernetes API, declared as a Terraform number
pub(crate) fn int32(description: &'static str) -> Attribute {
    Attribute::int64(description).validator(int64_between(i32::MIN.into(), i32::MAX.into()))
}

#[cfg(test)]
mod tests {

    use super::IntOrString;

    #[test]
    fn test_int_or_string_untagged() {
        let port: IntOrString = serde_json::from_str("8080").expect("int");
        assert_eq!(port, IntOrString::Int(8080));

        let port: IntOrString = serde_json::from_str(r#""http""#).expect("string");
        assert_eq!(port, IntOrString::from("http"));
        assert_eq!(port.to_string(), "http");

        assert_eq!(
            serde_json::to_string(&IntOrString::from(9090)).expect("serialize"),
            "9090"
        );
    }
}
