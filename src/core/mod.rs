//! Core business logic abstractions

pub mod catalog;
pub mod config;
pub mod convert;
pub mod history;
pub mod log;
pub mod rate;
pub mod session;

// Re-export main types for cleaner imports
pub use catalog::{Catalog, CatalogProvider};
pub use convert::{ConversionEngine, ConversionOutcome};
pub use history::{HISTORY_LIMIT, History, Transaction};
pub use rate::RateProvider;
pub use session::Session;
