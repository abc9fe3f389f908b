pub mod clear;
pub mod convert;
pub mod list;
pub mod raw;
pub mod setup;
pub mod ui;

use crate::core::config::{AppConfig, load_access_key};
use crate::core::error::Result;
use crate::core::{DayCache, FetchResult, RateProvider};
use crate::providers::ExchangeRatesApiProvider;
use std::future::Future;
use tracing::debug;

/// A day's rates together with the exact bytes they were decoded from.
#[derive(Debug, Clone)]
pub struct DaySnapshot {
    pub raw: Vec<u8>,
    pub data: FetchResult,
}

/// Reads the day from cache or fetches it, then validates the payload.
/// Only a valid payload is written back to the cache.
pub async fn snapshot_from<F, Fut>(cache: &DayCache, key: &str, fetch: F) -> Result<DaySnapshot>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<u8>>>,
{
    let raw = cache.read_or_fetch(key, fetch).await?;
    let data = FetchResult::decode(&raw)?;
    data.validate()?;
    debug!(
        base = %data.base,
        date = %data.date,
        rates = data.rates.len(),
        "Rates are valid"
    );

    cache.write(key, &raw)?;
    Ok(DaySnapshot { raw, data })
}

/// Loads the snapshot for `key`, fetching from the configured provider on a miss.
/// The access key is only read when a fetch is needed.
pub async fn load_snapshot(
    config: &AppConfig,
    cache: &DayCache,
    key: &str,
) -> anyhow::Result<DaySnapshot> {
    let key_path = config.access_key_path()?;
    let base_url = config.provider.base_url.as_str();

    let fetch = move || async move {
        let access_key = load_access_key(&key_path)?;
        let provider = ExchangeRatesApiProvider::new(base_url, access_key);
        let spinner = ui::new_spinner(&format!("Fetching rates for {key}"));
        let result = provider.fetch_raw_for_day(key).await;
        spinner.finish_and_clear();
        result
    };

    Ok(snapshot_from(cache, key, fetch).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurryError, InvalidData};
    use std::fs;
    use tempfile::tempdir;

    const VALID: &[u8] = br#"{"success":true,"base":"EUR","date":"2024-01-15","rates":{"GBP":0.86,"USD":1.09}}"#;

    #[tokio::test]
    async fn test_valid_fetch_is_persisted() {
        let dir = tempdir().unwrap();
        let cache = DayCache::new(dir.path());

        let snapshot = snapshot_from(&cache, "2024-01-15", || async {
            Ok::<_, CurryError>(VALID.to_vec())
        })
        .await
        .unwrap();

        assert_eq!(snapshot.raw, VALID);
        assert_eq!(snapshot.data.rates.len(), 2);
        assert_eq!(fs::read(cache.path("2024-01-15")).unwrap(), VALID);
    }

    #[tokio::test]
    async fn test_invalid_fetch_is_not_persisted() {
        let dir = tempdir().unwrap();
        let cache = DayCache::new(dir.path());
        let body = br#"{"success":false,"error":{"code":104,"type":"usage_limit_reached","info":"limit"}}"#;

        let result = snapshot_from(&cache, "2024-01-15", || async {
            Ok::<_, CurryError>(body.to_vec())
        })
        .await;

        match result {
            Err(CurryError::InvalidData(InvalidData::Provider(error))) => {
                assert_eq!(error.code, 104)
            }
            other => panic!("Expected invalid data error, got {other:?}"),
        }
        assert!(!cache.exists("2024-01-15"));
    }

    #[tokio::test]
    async fn test_malformed_fetch_is_not_persisted() {
        let dir = tempdir().unwrap();
        let cache = DayCache::new(dir.path());

        let result = snapshot_from(&cache, "2024-01-15", || async {
            Ok::<_, CurryError>(b"not json".to_vec())
        })
        .await;

        assert!(matches!(result, Err(CurryError::Decode(_))));
        assert!(!cache.exists("2024-01-15"));
    }

    #[tokio::test]
    async fn test_cache_hit_does_not_need_access_key() {
        let dir = tempdir().unwrap();
        let cache = DayCache::new(dir.path().join("cache"));
        cache.write("2024-01-15", VALID).unwrap();

        let config = AppConfig {
            access_key_path: Some(dir.path().join("missing_key").to_string_lossy().into_owned()),
            ..Default::default()
        };

        let snapshot = load_snapshot(&config, &cache, "2024-01-15").await.unwrap();
        assert_eq!(snapshot.raw, VALID);
    }

    #[tokio::test]
    async fn test_cache_miss_without_access_key_fails() {
        let dir = tempdir().unwrap();
        let cache = DayCache::new(dir.path().join("cache"));

        let config = AppConfig {
            access_key_path: Some(dir.path().join("missing_key").to_string_lossy().into_owned()),
            ..Default::default()
        };

        let err = load_snapshot(&config, &cache, "2024-01-15").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CurryError>(),
            Some(CurryError::Credential { .. })
        ));
    }
}
