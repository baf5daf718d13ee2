pub mod currency_api;
pub mod fallback;

pub use currency_api::CurrencyApiProvider;
pub use fallback::FallbackChain;
