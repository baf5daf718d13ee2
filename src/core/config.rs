use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_PRIMARY_BASE_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest";
pub const DEFAULT_FALLBACK_BASE_URL: &str = "https://latest.currency-api.pages.dev";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourcesConfig {
    pub primary: Option<SourceConfig>,
    pub fallback: Option<SourceConfig>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            primary: Some(SourceConfig {
                base_url: DEFAULT_PRIMARY_BASE_URL.to_string(),
            }),
            fallback: Some(SourceConfig {
                base_url: DEFAULT_FALLBACK_BASE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to the
    /// built-in defaults when no config file exists. The converter must
    /// work out of the box.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "fxconv", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn primary_base_url(&self) -> &str {
        self.sources
            .primary
            .as_ref()
            .map_or(DEFAULT_PRIMARY_BASE_URL, |s| &s.base_url)
    }

    pub fn fallback_base_url(&self) -> &str {
        self.sources
            .fallback
            .as_ref()
            .map_or(DEFAULT_FALLBACK_BASE_URL, |s| &s.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
sources:
  primary:
    base_url: "http://example.com/primary"
  fallback:
    base_url: "http://example.com/fallback"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.primary_base_url(), "http://example.com/primary");
        assert_eq!(config.fallback_base_url(), "http://example.com/fallback");
    }

    #[test]
    fn test_missing_sources_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.primary_base_url(), DEFAULT_PRIMARY_BASE_URL);
        assert_eq!(config.fallback_base_url(), DEFAULT_FALLBACK_BASE_URL);

        let yaml_str = r#"
sources:
  primary:
    base_url: "http://example.com/primary"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.primary_base_url(), "http://example.com/primary");
        assert_eq!(config.fallback_base_url(), DEFAULT_FALLBACK_BASE_URL);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/fxconv/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
