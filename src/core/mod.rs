//! Core business logic: rate data, conversion and the day cache

pub mod cache;
pub mod config;
pub mod convert;
pub mod day;
pub mod error;
pub mod log;
pub mod provider;
pub mod rates;

// Re-export main types for cleaner imports
pub use cache::DayCache;
pub use error::{CurrencyRole, CurryError};
pub use provider::RateProvider;
pub use rates::{FetchResult, InvalidData, ProviderError, Rates};
