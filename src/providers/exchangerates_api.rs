use crate::core::error::{CurryError, Result};
use crate::core::provider::RateProvider;
use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

// ExchangeRatesApiProvider implementation for RateProvider
pub struct ExchangeRatesApiProvider {
    base_url: String,
    access_key: String,
}

impl ExchangeRatesApiProvider {
    pub fn new(base_url: &str, access_key: String) -> Self {
        ExchangeRatesApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
        }
    }

    fn day_url(&self, day: &str) -> Result<Url> {
        let endpoint = format!("{}/{}", self.base_url, day);
        Url::parse_with_params(&endpoint, &[("access_key", self.access_key.as_str())])
            .map_err(|e| CurryError::transport(endpoint, e))
    }
}

#[async_trait]
impl RateProvider for ExchangeRatesApiProvider {
    #[instrument(name = "RatesFetch", skip(self), fields(day = %day))]
    async fn fetch_raw_for_day(&self, day: &str) -> Result<Vec<u8>> {
        let url = self.day_url(day)?;
        // Keep the access key out of logs and error messages.
        let display_url = format!("{}/{}", self.base_url, day);
        debug!("Requesting rates from {}", display_url);

        let client = reqwest::Client::builder()
            .user_agent("curry/0.1")
            .build()
            .map_err(|e| CurryError::transport(&display_url, e))?;

        let response = client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CurryError::transport(&display_url, e.without_url()))?;

        debug!(status = %response.status(), "Received rates response");

        let body = response
            .bytes()
            .await
            .map_err(|e| CurryError::transport(&display_url, e.without_url()))?;
        Ok(body.to_vec())
    }
}
