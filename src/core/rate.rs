//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64>;
}
