//! Rate table and provider payload model
//!
//! A payload is only usable when the provider flagged success, reported no
//! error code and returned at least one rate.

use crate::core::error::Result;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Exchange rates keyed by currency code, relative to the payload's base currency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Rates(BTreeMap<String, f64>);

impl Rates {
    /// Rate for `code`, or zero when the table does not know it.
    pub fn rate(&self, code: &str) -> f64 {
        self.0.get(code).copied().unwrap_or(0.0)
    }

    /// Currency codes in ascending order. Every call walks the table afresh.
    pub fn currencies(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Rates {
    fn from(entries: [(&str, f64); N]) -> Self {
        Rates(
            entries
                .into_iter()
                .map(|(code, rate)| (code.to_string(), rate))
                .collect(),
        )
    }
}

/// Reads an explicit `null` as the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error descriptor embedded in a failed provider response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderError {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub info: String,
}

impl ProviderError {
    fn is_present(&self) -> bool {
        self.code != 0 || !self.kind.is_empty()
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.kind, self.info)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidData {
    #[error("{0}")]
    Provider(ProviderError),
    #[error("no rates returned")]
    NoRates,
}

/// One day's snapshot as returned by the rate provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub historical: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub base: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rates: Rates,
    #[serde(deserialize_with = "null_as_default")]
    pub error: ProviderError,
}

impl FetchResult {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), InvalidData> {
        if self.success && self.error.code == 0 && !self.rates.is_empty() {
            return Ok(());
        }
        if self.error.is_present() {
            Err(InvalidData::Provider(self.error.clone()))
        } else {
            Err(InvalidData::NoRates)
        }
    }
}
