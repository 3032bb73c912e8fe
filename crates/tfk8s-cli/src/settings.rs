use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tfk8s_manifests::DEFAULT_PROVIDER_NAME;

/// Home Directory for the tfk8s CLI
pub const TFK8S_HOME_DIR: &str = ".tfk8s";

pub const SETTINGS_TOML_FILENAME: &str = "settings.toml";

/// Optional `settings.toml`, holding defaults for values that can also be
/// given on the command line.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Provider type name used when no `--provider-name` is given
    pub provider_name: Option<String>,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_level: Option<String>,
}

impl Settings {
    /// An explicit path must exist. The default path is only read when
    /// present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::open(path);
        }

        match Self::settings_file_path() {
            Some(path) if path.exists() => Self::open(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Opens a `settings.toml` file and parses it into a `Settings` struct.
    pub fn open(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)
            .with_context(|| format!("unable to read settings from {}", path.display()))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(?path, "loaded settings");

        Ok(settings)
    }

    /// Command line or environment first, then this file, then the default.
    pub fn provider_name(&self, from_args: Option<&str>) -> String {
        from_args
            .or(self.provider_name.as_deref())
            .unwrap_or(DEFAULT_PROVIDER_NAME)
            .to_owned()
    }

    /// Retrieves the path to `~/.tfk8s/settings.toml` for this host
    fn settings_file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(TFK8S_HOME_DIR).join(SETTINGS_TOML_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_settings() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join(SETTINGS_TOML_FILENAME);
        write(&path, "provider_name = \"kubernetes\"\nlog_level = \"debug\"\n").expect("write");

        let settings = Settings::load(Some(&path)).expect("settings");
        assert_eq!(
            settings,
            Settings {
                provider_name: Some("kubernetes".to_owned()),
                log_level: Some("debug".to_owned()),
            }
        );
    }

    #[test]
    fn test_partial_settings() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join(SETTINGS_TOML_FILENAME);
        write(&path, "log_level = \"info\"\n").expect("write");

        let settings = Settings::open(&path).expect("settings");
        assert_eq!(settings.provider_name, None);
        assert_eq!(settings.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_missing_explicit_settings() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let err = Settings::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("unable to read settings"));
    }

    #[test]
    fn test_invalid_settings() {
        let dir = tempfile::tempdir().expect("temp dir created");
        let path = dir.path().join(SETTINGS_TOML_FILENAME);
        write(&path, "provider_name = [").expect("write");

        assert!(Settings::open(&path).is_err());
    }

    #[test]
    fn test_provider_name_precedence() {
        let settings = Settings {
            provider_name: Some("from_file".to_owned()),
            log_level: None,
        };
        assert_eq!(settings.provider_name(Some("from_flag")), "from_flag");
        assert_eq!(settings.provider_name(None), "from_file");
        assert_eq!(Settings::default().provider_name(None), "k8s");
    }
}
