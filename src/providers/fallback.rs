//! Sequential fallback chain over an ordered list of data sources.
//!
//! Sources are tried in order; the first success wins. Each failed attempt
//! is logged and the next source is tried, so a transport failure and a
//! malformed response degrade identically. Only when every source fails
//! does the chain itself fail, with the last error.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::warn;

use crate::core::catalog::{Catalog, CatalogProvider};
use crate::core::rate::RateProvider;

pub struct FallbackChain<P> {
    sources: Vec<P>,
}

impl<P> FallbackChain<P> {
    pub fn new(sources: Vec<P>) -> Self {
        FallbackChain { sources }
    }
}

#[async_trait]
impl<P: CatalogProvider> CatalogProvider for FallbackChain<P> {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let mut last_error = anyhow!("No catalog sources configured");
        for (index, source) in self.sources.iter().enumerate() {
            match source.fetch_catalog().await {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    warn!("Catalog source {} failed: {}", index + 1, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

#[async_trait]
impl<P: RateProvider> RateProvider for FallbackChain<P> {
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64> {
        let mut last_error = anyhow!("No rate sources configured");
        for (index, source) in self.sources.iter().enumerate() {
            match source.fetch_rate(from, to).await {
                Ok(rate) => return Ok(rate),
                Err(e) => {
                    warn!("Rate source {} failed for {} to {}: {}", index + 1, from, to, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRateSource {
        rate: Option<f64>,
        call_count: AtomicUsize,
    }

    impl MockRateSource {
        fn succeeding(rate: f64) -> Self {
            Self {
                rate: Some(rate),
                call_count: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                rate: None,
                call_count: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for &MockRateSource {
        async fn fetch_rate(&self, _from: &str, _to: &str) -> Result<f64> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            self.rate.ok_or_else(|| anyhow!("source down"))
        }
    }

    struct MockCatalogSource {
        available: bool,
    }

    #[async_trait]
    impl CatalogProvider for MockCatalogSource {
        async fn fetch_catalog(&self) -> Result<Catalog> {
            if self.available {
                Ok(Catalog::from([("usd".to_string(), "US Dollar".to_string())]))
            } else {
                Err(anyhow!("source down"))
            }
        }
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let primary = MockRateSource::succeeding(0.92);
        let fallback = MockRateSource::succeeding(0.5);
        let chain = FallbackChain::new(vec![&primary, &fallback]);

        let rate = chain.fetch_rate("usd", "eur").await.unwrap();
        assert_eq!(rate, 0.92);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_fallback_used_when_primary_fails() {
        let primary = MockRateSource::failing();
        let fallback = MockRateSource::succeeding(0.93);
        let chain = FallbackChain::new(vec![&primary, &fallback]);

        let rate = chain.fetch_rate("usd", "eur").await.unwrap();
        assert_eq!(rate, 0.93);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn test_all_sources_failing_is_error() {
        let primary = MockRateSource::failing();
        let fallback = MockRateSource::failing();
        let chain = FallbackChain::new(vec![&primary, &fallback]);

        let result = chain.fetch_rate("usd", "eur").await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "source down");
    }

    #[tokio::test]
    async fn test_empty_chain_is_error() {
        let chain: FallbackChain<&MockRateSource> = FallbackChain::new(vec![]);
        let result = chain.fetch_rate("usd", "eur").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rate sources configured"
        );
    }

    #[tokio::test]
    async fn test_catalog_fallback() {
        let chain = FallbackChain::new(vec![
            MockCatalogSource { available: false },
            MockCatalogSource { available: true },
        ]);

        let catalog = chain.fetch_catalog().await.unwrap();
        assert_eq!(catalog.get("usd"), Some(&"US Dollar".to_string()));
    }

    #[tokio::test]
    async fn test_catalog_all_sources_failing_is_error() {
        let chain = FallbackChain::new(vec![
            MockCatalogSource { available: false },
            MockCatalogSource { available: false },
        ]);

        assert!(chain.fetch_catalog().await.is_err());
    }
}
