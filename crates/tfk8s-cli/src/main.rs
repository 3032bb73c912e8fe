mod command;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use tfk8s_manifests::provider;

use self::command::list::ListOpt;
use self::command::read::ReadOpt;
use self::command::schema::SchemaOpt;
use self::settings::Settings;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let settings = Settings::load(args.global_opts.settings.as_deref())
        .map_err(|err| eyre!("{err:#}"))?;
    init_logging(&settings);

    args.process(&settings).map_err(|err| eyre!("{err:#}"))?;
    Ok(())
}

/// `RUST_LOG` wins over the `log_level` of the settings file
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_deref().unwrap_or("warn")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Args, Clone, Default)]
pub struct GlobalOptions {
    /// Provider type name the data sources are registered under
    #[arg(long, global = true, env = "TFK8S_PROVIDER_NAME")]
    provider_name: Option<String>,

    /// Path to the settings file, defaults to ~/.tfk8s/settings.toml
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(
    about = "Render Kubernetes manifests from Terraform style configuration",
    name = "tfk8s",
    max_term_width = 100
)]
pub struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOptions,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// List the data sources of the provider
    #[command(name = "list")]
    List(ListOpt),
    /// Print the schema of a data source as JSON
    #[command(name = "schema")]
    Schema(SchemaOpt),
    /// Read a data source from a configuration file
    #[command(name = "read")]
    Read(ReadOpt),
}

impl Cli {
    fn process(&self, settings: &Settings) -> anyhow::Result<()> {
        let provider_name = settings.provider_name(self.global_opts.provider_name.as_deref());
        tracing::debug!(%provider_name, "using provider");
        let provider = provider(&provider_name)?;

        match &self.command {
            Command::List(cmd) => cmd.process(&provider),
            Command::Schema(cmd) => cmd.process(&provider),
            Command::Read(cmd) => cmd.process(&provider),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use crate::Command;
    use crate::command::read::ReadOutput;

    use super::Cli;

    fn parse(command: &str) -> Result<Cli, clap::error::Error> {
        Cli::try_parse_from(command.split_whitespace())
    }

    #[test]
    fn recognizes_global_args_after_subcommand() {
        let args = parse("tfk8s list --provider-name kubernetes --settings /tmp/tfk8s.toml")
            .expect("Should parse command as valid");

        assert_eq!(args.global_opts.provider_name.as_deref(), Some("kubernetes"));
        assert_eq!(
            args.global_opts.settings.as_deref(),
            Some(Path::new("/tmp/tfk8s.toml"))
        );
        assert!(matches!(args.command, Command::List(_)));
    }

    #[test]
    fn read_defaults_to_yaml_output() {
        let args = parse("tfk8s read k8s_data_fluid_io_thin_runtime_v1alpha1_manifest --config demo.json")
            .expect("Should parse command as valid");

        let Command::Read(read) = args.command else {
            panic!("expected read command");
        };
        assert_eq!(read.output, ReadOutput::Yaml);
        assert_eq!(read.config, Path::new("demo.json"));
    }

    #[test]
    fn read_requires_config() {
        assert!(parse("tfk8s read k8s_data_fluid_io_thin_runtime_v1alpha1_manifest").is_err());
    }

    #[test]
    fn schema_requires_type_name() {
        assert!(parse("tfk8s schema").is_err());
        assert!(parse("tfk8s schema k8s_data_fluid_io_thin_runtime_v1alpha1_manifest").is_ok());
    }
}
