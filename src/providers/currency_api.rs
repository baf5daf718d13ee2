use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::catalog::{Catalog, CatalogProvider};
use crate::core::rate::RateProvider;

/// One currency-api source (jsDelivr CDN or the pages.dev mirror), selected
/// by base URL. Serves both the catalog and per-currency rate tables.
pub struct CurrencyApiProvider {
    base_url: String,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str) -> Self {
        CurrencyApiProvider {
            base_url: base_url.to_string(),
        }
    }

    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {}", url);

        let client = reqwest::Client::builder().user_agent("fxconv/1.0").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response from {}: {}", url, e))
    }
}

#[async_trait]
impl CatalogProvider for CurrencyApiProvider {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let body = self.get_json("/v1/currencies.json").await?;
        let catalog: Catalog = serde_json::from_value(body)
            .map_err(|e| anyhow!("Unexpected currency catalog shape: {}", e))?;
        debug!("Fetched catalog with {} currencies", catalog.len());
        Ok(catalog)
    }
}

#[async_trait]
impl RateProvider for CurrencyApiProvider {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64> {
        let from = from.to_lowercase();
        let to = to.to_lowercase();

        let body = self.get_json(&format!("/v1/currencies/{from}.json")).await?;

        // The table must resolve through both keys to a number before the
        // rate is trusted. Extra fields (e.g. "date") are ignored.
        body.get(&from)
            .and_then(|table| table.get(&to))
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("No rate found for {} to {}", from, to))
    }
}
