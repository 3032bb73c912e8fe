use std::fmt;

use serde::{Serialize, Serializer};

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PathStep {
    Attribute(String),
    ElementKey(String),
    ElementIndex(usize),
}

/// Location of a value inside a configuration object, rendered the way
/// Terraform prints it: `spec.fuse.env[0].name`, `metadata.labels["app"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn attribute(&self, name: impl Into<String>) -> Self {
        self.push(PathStep::Attribute(name.into()))
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        self.push(PathStep::ElementKey(key.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.push(PathStep::ElementIndex(index))
    }

    fn push(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (position, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if position == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::ElementKey(key) => write!(f, "[{key:?}]")?,
                PathStep::ElementIndex(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {

    use super::AttributePath;

    #[test]
    fn test_display_nested_path() {
        let path = AttributePath::root()
            .attribute("spec")
            .attribute("fuse")
            .attribute("env")
            .index(0)
            .attribute("name");
        assert_eq!(path.to_string(), "spec.fuse.env[0].name");
    }

    #[test]
    fn test_display_map_key() {
        let path = AttributePath::root().attribute("metadata").attribute("labels").key("app");
        assert_eq!(path.to_string(), r#"metadata.labels["app"]"#);
    }

    #[test]
    fn test_root_is_empty() {
        let root = AttributePath::root();
        assert!(root.is_root());
        assert_eq!(root.to_string(), "");
        assert!(!root.attribute("yaml").is_root());
    }
}
