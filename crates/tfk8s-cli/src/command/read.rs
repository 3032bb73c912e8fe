//! Read Data Source Command
//!
//! Loads a configuration file, runs the data source read through the
//! provider and prints the rendered manifest. Diagnostics go to stderr.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use serde_json::Value;

use tfk8s_framework::Provider;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReadOutput {
    /// Only the `yaml` attribute
    #[default]
    Yaml,
    /// The whole state, as JSON
    State,
}

#[derive(Debug, Parser)]
pub struct ReadOpt {
    /// Full type name of the data source
    #[arg(value_name = "TYPE")]
    pub(crate) type_name: String,

    /// Configuration file, JSON when it ends in `.json`, YAML otherwise
    #[arg(long, value_name = "FILE")]
    pub(crate) config: PathBuf,

    #[arg(long, value_enum, default_value_t = ReadOutput::Yaml)]
    pub(crate) output: ReadOutput,
}

impl ReadOpt {
    pub fn process(&self, provider: &Provider) -> Result<()> {
        print!("{}", self.read(provider)?);
        Ok(())
    }

    fn read(&self, provider: &Provider) -> Result<String> {
        let config = load_config(&self.config)?;
        let response = provider.read_data_source(&self.type_name, config);

        for diagnostic in response.diagnostics.iter() {
            eprintln!("{diagnostic}\n");
        }
        if response.diagnostics.has_error() {
            return Err(anyhow!(
                "reading {} failed with {} error(s)",
                self.type_name,
                response.diagnostics.errors().count()
            ));
        }

        let state = response
            .state
            .ok_or_else(|| anyhow!("{} returned no state", self.type_name))?;

        match self.output {
            ReadOutput::Yaml => state["yaml"]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| anyhow!("{} state has no yaml attribute", self.type_name)),
            ReadOutput::State => Ok(format!("{}\n", serde_json::to_string_pretty(&state)?)),
        }
    }
}

fn load_config(path: &Path) -> Result<Value> {
    let contents = read_to_string(path)
        .with_context(|| format!("unable to read configuration from {}", path.display()))?;

    let config: Value = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid YAML in {}", path.display()))?
    };
    tracing::trace!(%config, "loaded configuration");

    Ok(config)
}
