//! Conversion engine: rate lookup plus the amount computation.

use crate::core::history::Transaction;
use crate::core::rate::RateProvider;
use chrono::Local;
use tracing::{debug, warn};

/// Result of one conversion request.
///
/// `Unavailable` is a value, not an error: no rate could be resolved from
/// any source, no transaction exists, and the caller must present an
/// explicit "not available" result.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    Converted(Transaction),
    Unavailable,
}

pub struct ConversionEngine<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionEngine<P> {
    pub fn new(provider: P) -> Self {
        ConversionEngine { provider }
    }

    /// Resolves the rate for the pair and computes `amount * rate`.
    ///
    /// The rate table is fetched fresh on every call. Empty codes
    /// short-circuit without any fetch. A zero amount is still a valid,
    /// recordable conversion once the rate resolves.
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> ConversionOutcome {
        if from.is_empty() || to.is_empty() {
            debug!("Missing currency selection, skipping conversion");
            return ConversionOutcome::Unavailable;
        }

        let rate = match self.provider.fetch_rate(from, to).await {
            Ok(rate) => rate,
            Err(e) => {
                warn!("No rate available for {} to {}: {}", from, to, e);
                return ConversionOutcome::Unavailable;
            }
        };

        let result = amount * rate;
        debug!("Converted {} {} to {} {} at rate {}", amount, from, result, to, rate);

        ConversionOutcome::Converted(Transaction {
            from: from.to_string(),
            to: to.to_string(),
            amount,
            result,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }
}
