use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ConfigError, Result};

/// Environment variable naming the configuration file read by [`RenderConfig::from_env`].
pub const CONFIG_ENV: &str = "SQLWEAVE_CONFIG";

/// PostgreSQL rejects statements carrying more bind parameters than this.
pub const DEFAULT_MAX_ARGUMENTS: usize = 65535;

/// Controls how statements are rendered into SQL text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Separator written between statement clauses and before join keywords.
    /// Default: "\n"
    pub line_separator: String,

    /// Maximum number of bound values a single statement may carry.
    /// Default: 65535
    pub max_arguments: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
            max_arguments: DEFAULT_MAX_ARGUMENTS,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration stored at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.as_ref().display(), "loaded render configuration");
        Ok(config)
    }

    /// Loads the file named by `SQLWEAVE_CONFIG`, or the defaults when the
    /// variable is unset or points at a file that does not exist.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Err(ConfigError::IoError(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path, "render configuration not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_separator.is_empty() {
            return Err(ConfigError::EmptyLineSeparator);
        }
        if self.max_arguments == 0 {
            return Err(ConfigError::ZeroMaxArguments);
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::test_utils::{with_env, write_config};

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.line_separator, "\n");
        assert_eq!(config.max_arguments, 65535);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RenderConfig::from_toml_str("line_separator = \" \"").unwrap();
        assert_eq!(config.line_separator, " ");
        assert_eq!(config.max_arguments, DEFAULT_MAX_ARGUMENTS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = RenderConfig::from_toml_str("line_separator = \"\"");
        assert!(matches!(result, Err(ConfigError::EmptyLineSeparator)));

        let result = RenderConfig::from_toml_str("max_arguments = 0");
        assert!(matches!(result, Err(ConfigError::ZeroMaxArguments)));
    }

    #[test]
    fn test_malformed_toml() {
        let result = RenderConfig::from_toml_str("line_separator = ");
        assert!(matches!(result, Err(ConfigError::TomlDeError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config("line_separator = \" \"\nmax_arguments = 10\n");
        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.line_separator, " ");
        assert_eq!(config.max_arguments, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RenderConfig {
            line_separator: " ".to_string(),
            max_arguments: 100,
        };
        let content = config.to_toml_string().unwrap();
        assert_eq!(RenderConfig::from_toml_str(&content).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_file() {
        let (_dir, path) = write_config("max_arguments = 3\n");
        let path = path.to_string_lossy().to_string();
        with_env(vec![(CONFIG_ENV, &path)], || {
            let config = RenderConfig::from_env().unwrap();
            assert_eq!(config.max_arguments, 3);
        });
    }

    #[test]
    #[serial]
    fn test_from_env_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path = path.to_string_lossy().to_string();
        with_env(vec![(CONFIG_ENV, &path)], || {
            let config = RenderConfig::from_env().unwrap();
            assert_eq!(config, RenderConfig::default());
        });
    }
}
