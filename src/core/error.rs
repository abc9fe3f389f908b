//! Error types shared by the cache, the provider client and the conversion engine.

use crate::core::rates::InvalidData;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CurryError> = std::result::Result<T, E>;

/// Which side of a conversion a currency code was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyRole {
    Source,
    Target,
}

impl fmt::Display for CurrencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyRole::Source => write!(f, "Source"),
            CurrencyRole::Target => write!(f, "Target"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CurryError {
    #[error("Request error: {source} for URL: {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Cache I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse rate data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unable to fetch rates: {0}")]
    InvalidData(#[from] InvalidData),

    #[error("{role} {code} is not supported. Run \"curry list\" to see available currencies.")]
    UnknownCurrency { role: CurrencyRole, code: String },

    #[error("{0}")]
    Input(String),

    #[error("Failed to read access key from {}: {source}", path.display())]
    Credential {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Access key file {} is empty", path.display())]
    EmptyCredential { path: PathBuf },
}

impl CurryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CurryError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn transport(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        CurryError::Transport {
            url: url.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency_message_names_code_and_hint() {
        let err = CurryError::UnknownCurrency {
            role: CurrencyRole::Target,
            code: "EUR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Target EUR is not supported. Run \"curry list\" to see available currencies."
        );
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = CurryError::io(
            "/tmp/curry/2024-01-15.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/curry/2024-01-15.json"));
        assert!(message.contains("denied"));
    }
}
