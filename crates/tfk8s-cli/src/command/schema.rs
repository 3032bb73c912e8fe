//! Show Schema Command
//!
//! Prints the attribute tree of a data source as JSON: kinds, presence,
//! descriptions and validators.

use anyhow::Result;
use clap::Parser;

use tfk8s_framework::Provider;

#[derive(Debug, Parser)]
pub struct SchemaOpt {
    /// Full type name of the data source
    #[arg(value_name = "TYPE")]
    pub(crate) type_name: String,
}

impl SchemaOpt {
    pub fn process(&self, provider: &Provider) -> Result<()> {
        println!("{}", self.render(provider)?);
        Ok(())
    }

    fn render(&self, provider: &Provider) -> Result<String> {
        let schema = provider.schema(&self.type_name)?;
        Ok(serde_json::to_string_pretty(schema)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use tfk8s_manifests::{DEFAULT_PROVIDER_NAME, provider};

    use super::SchemaOpt;

    #[test]
    fn renders_schema_as_json() {
        let provider = provider(DEFAULT_PROVIDER_NAME).expect("provider");
        let opt = SchemaOpt {
            type_name: "k8s_data_fluid_io_thin_runtime_v1alpha1_manifest".to_owned(),
        };

        let schema: Value =
            serde_json::from_str(&opt.render(&provider).expect("render")).expect("json");
        assert_eq!(schema["attributes"]["yaml"]["presence"], "computed");
        assert_eq!(schema["attributes"]["metadata"]["presence"], "required");
    }

    #[test]
    fn unknown_type_name() {
        let provider = provider(DEFAULT_PROVIDER_NAME).expect("provider");
        let opt = SchemaOpt {
            type_name: "k8s_missing".to_owned(),
        };
        assert!(opt.render(&provider).is_err());
    }
}
