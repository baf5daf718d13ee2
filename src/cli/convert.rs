use super::ui;
use crate::core::catalog::CatalogProvider;
use crate::core::convert::ConversionOutcome;
use crate::core::history::Transaction;
use crate::core::rate::RateProvider;
use crate::core::session::{Session, parse_amount};
use anyhow::Result;

pub fn format_transaction(tx: &Transaction) -> String {
    format!(
        "{} {} to {} = {} {}",
        tx.amount,
        tx.from.to_uppercase(),
        tx.to.to_uppercase(),
        tx.result,
        tx.to.to_uppercase()
    )
}

/// One-shot conversion. An unavailable rate is a degraded result, not an
/// error: the message is printed and the command still exits cleanly.
pub async fn run<C, R>(
    session: &mut Session<C, R>,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<()>
where
    C: CatalogProvider,
    R: RateProvider,
{
    let amount = parse_amount(amount);

    let spinner = ui::new_spinner("Loading currency catalog...");
    session.load_catalog().await;
    spinner.finish_and_clear();

    match session.convert(from, to, amount).await {
        ConversionOutcome::Converted(tx) => {
            println!(
                "{}",
                ui::style_text(&format_transaction(&tx), ui::StyleType::ResultValue)
            );
        }
        ConversionOutcome::Unavailable => {
            println!(
                "{}",
                ui::style_text("Conversion rate not available", ui::StyleType::Error)
            );
        }
    }
    Ok(())
}
