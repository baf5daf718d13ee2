//! Currency catalog abstractions

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mapping from lowercase currency code to display name.
pub type Catalog = HashMap<String, String>;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog>;
}
