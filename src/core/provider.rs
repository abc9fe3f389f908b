//! Rate provider abstraction

use crate::core::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Raw response body for `day` (`YYYY-MM-DD`), uninterpreted.
    async fn fetch_raw_for_day(&self, day: &str) -> Result<Vec<u8>>;
}
