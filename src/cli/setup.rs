use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Stores the provider access key at the location the configuration points to
pub fn setup(access_key: &str, config: &AppConfig) -> Result<()> {
    let path = config.access_key_path()?;
    setup_at_path(&path, access_key)
}

/// Stores the provider access key at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P, access_key: &str) -> Result<()> {
    let path = path.as_ref();
    let access_key = access_key.trim();

    if access_key.is_empty() {
        anyhow::bail!("Access key must not be empty");
    }

    if path.exists() {
        anyhow::bail!("Access key file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, format!("{access_key}\n"))
        .with_context(|| format!("Failed to write access key to {}", path.display()))?;

    tracing::info!("Stored access key at {}", path.display());
    Ok(())
}
