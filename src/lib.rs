pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::session::Session;
use crate::providers::{CurrencyApiProvider, FallbackChain};
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum AppCommand {
    Interactive,
    Convert {
        from: String,
        to: String,
        amount: String,
    },
    Currencies,
}

fn source_chain(config: &AppConfig) -> FallbackChain<CurrencyApiProvider> {
    FallbackChain::new(vec![
        CurrencyApiProvider::new(config.primary_base_url()),
        CurrencyApiProvider::new(config.fallback_base_url()),
    ])
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    // Catalog lookups and rate lookups each get their own two-source chain.
    let mut session = Session::new(source_chain(&config), source_chain(&config));

    match command {
        AppCommand::Interactive => cli::interactive::run(&mut session).await,
        AppCommand::Convert { from, to, amount } => {
            cli::convert::run(&mut session, &from, &to, &amount).await
        }
        AppCommand::Currencies => cli::currencies::run(&mut session).await,
    }
}
