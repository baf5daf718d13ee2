//! Session state and the action handlers that mutate it.
//!
//! All UI-visible state for one interactive run lives here: the currency
//! catalog loaded at startup, and the bounded history of completed
//! conversions. State changes only through the handlers below, each driven
//! by a completed fetch or a user action.

use crate::core::catalog::{Catalog, CatalogProvider};
use crate::core::convert::{ConversionEngine, ConversionOutcome};
use crate::core::history::History;
use crate::core::rate::RateProvider;
use tracing::{info, warn};

pub struct Session<C: CatalogProvider, R: RateProvider> {
    catalog_provider: C,
    engine: ConversionEngine<R>,
    catalog: Catalog,
    history: History,
}

impl<C: CatalogProvider, R: RateProvider> Session<C, R> {
    pub fn new(catalog_provider: C, rate_provider: R) -> Self {
        Session {
            catalog_provider,
            engine: ConversionEngine::new(rate_provider),
            catalog: Catalog::new(),
            history: History::new(),
        }
    }

    /// Populates the catalog, once, at session startup.
    ///
    /// Degrades to an empty catalog when every source fails; never an error.
    pub async fn load_catalog(&mut self) {
        match self.catalog_provider.fetch_catalog().await {
            Ok(catalog) => {
                info!("Loaded {} currencies", catalog.len());
                self.catalog = catalog;
            }
            Err(e) => {
                warn!("Could not load currency catalog: {}", e);
                self.catalog = Catalog::new();
            }
        }
    }

    /// Runs one conversion and records it into history when it succeeds.
    pub async fn convert(&mut self, from: &str, to: &str, amount: f64) -> ConversionOutcome {
        let from = from.to_lowercase();
        let to = to.to_lowercase();

        if !self.is_known_code(&from) || !self.is_known_code(&to) {
            warn!("Unknown currency selection: {} / {}", from, to);
            return ConversionOutcome::Unavailable;
        }

        let outcome = self.engine.convert(&from, &to, amount).await;
        if let ConversionOutcome::Converted(tx) = &outcome {
            self.history.record(tx.clone());
        }
        outcome
    }

    /// The catalog is advisory: with an empty catalog (both sources down)
    /// any non-empty code is attempted, so a catalog outage does not also
    /// disable conversion.
    fn is_known_code(&self, code: &str) -> bool {
        !code.is_empty() && (self.catalog.is_empty() || self.catalog.contains_key(code))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

/// Normalizes free-form amount input. Non-numeric input becomes 0, never
/// NaN.
pub fn parse_amount(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => 0.0,
    }
}
