use crate::core::error::{CurryError, Result as CurryResult};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://api.exchangeratesapi.io";
pub const DEFAULT_CURRENCY: &str = "GBP";
const ACCESS_KEY_FILE: &str = "api_key";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub cache_path: Option<String>,
    pub access_key_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            provider: ProviderConfig::default(),
            currency: default_currency(),
            cache_path: None,
            access_key_path: None,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "curry").context("Could not determine project directories")
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults when it is absent.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    pub fn default_access_key_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join(ACCESS_KEY_FILE))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.cache_path {
            return Ok(PathBuf::from(custom_path));
        }
        Ok(project_dirs()?.cache_dir().to_path_buf())
    }

    pub fn access_key_path(&self) -> Result<PathBuf> {
        match &self.access_key_path {
            Some(custom_path) => Ok(PathBuf::from(custom_path)),
            None => Self::default_access_key_path(),
        }
    }
}

/// Reads the provider access key, trimmed of surrounding whitespace.
pub fn load_access_key(path: &Path) -> CurryResult<String> {
    let raw = fs::read_to_string(path).map_err(|source| CurryError::Credential {
        path: path.to_path_buf(),
        source,
    })?;
    let key = raw.trim();
    if key.is_empty() {
        return Err(CurryError::EmptyCredential {
            path: path.to_path_buf(),
        });
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/rates"
currency: "EUR"
cache_path: "/tmp/curry-cache"
access_key_path: "/tmp/curry-key"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/rates");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.cache_dir().unwrap(), PathBuf::from("/tmp/curry-cache"));
        assert_eq!(
            config.access_key_path().unwrap(),
            PathBuf::from("/tmp/curry-key")
        );
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
        assert!(config.cache_path.is_none());
        assert!(config.access_key_path.is_none());

        let config: AppConfig =
            serde_yaml::from_str("currency: USD").expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = AppConfig::load_from_path(temp_dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }

    #[test]
    fn test_load_from_invalid_yaml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "provider: [unclosed").unwrap();

        let result = AppConfig::load_from_path(&path);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config file")
        );
    }

    #[test]
    fn test_load_access_key_trims_whitespace() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("api_key");
        fs::write(&path, "  abc123\n\n").unwrap();

        assert_eq!(load_access_key(&path).unwrap(), "abc123");
    }

    #[test]
    fn test_load_access_key_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("api_key");

        assert!(matches!(
            load_access_key(&path),
            Err(CurryError::Credential { .. })
        ));

        fs::write(&path, " \n").unwrap();
        assert!(matches!(
            load_access_key(&path),
            Err(CurryError::EmptyCredential { .. })
        ));
    }
}
