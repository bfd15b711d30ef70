//! Nutridose configuration
//!
//! Loaded from `nutridose.yaml` in the working directory, or from the
//! path given with `--config`. Every field is optional.
//!
//! ```yaml
//! version: 1
//! output_dir: reports
//! log_filter: nutridose=debug
//! ```

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "nutridose.yaml";

/// Tracing filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "nutridose=warn";

/// Nutridose configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory that relative output paths are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: None,
            log_filter: None,
        }
    }
}

impl Config {
    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_norway::from_str(content)?;

        if config.version != 1 {
            return Err(Error::Other(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load an explicit config file; it must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `nutridose.yaml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let file = dir.join(CONFIG_FILE);
        if !file.exists() {
            return Ok(Self::default());
        }
        Self::load(&file)
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Resolve an output path against `output_dir`
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_from_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE),
            "version: 1\noutput_dir: reports\nlog_filter: nutridose=debug\n",
        )
        .unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(config.log_filter(), "nutridose=debug");
    }

    #[test]
    fn test_resolve_output() {
        let config = Config {
            output_dir: Some(PathBuf::from("reports")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_output(Path::new("out.txt")),
            PathBuf::from("reports/out.txt")
        );

        let absolute = std::env::temp_dir().join("out.txt");
        assert_eq!(config.resolve_output(&absolute), absolute);
        assert_eq!(
            Config::default().resolve_output(Path::new("out.txt")),
            PathBuf::from("out.txt")
        );
    }

    #[test]
    fn test_rejects_bad_version_and_unknown_keys() {
        assert!(Config::from_yaml("version: 2\n").is_err());
        assert!(matches!(
            Config::from_yaml("colour: blue\n"),
            Err(Error::Yaml(_))
        ));
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }
}
