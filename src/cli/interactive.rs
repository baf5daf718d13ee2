//! Interactive conversion session: prompt loop, result display, and the
//! last-five history table.

use super::{convert::format_transaction, currencies::catalog_table, ui};
use crate::core::catalog::CatalogProvider;
use crate::core::convert::ConversionOutcome;
use crate::core::history::History;
use crate::core::rate::RateProvider;
use crate::core::session::{Session, parse_amount};
use anyhow::Result;
use comfy_table::{Cell, Table};
use std::io::{self, BufRead, Write};

fn history_table(history: &History) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("When"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Amount"),
        ui::header_cell("Result"),
    ]);

    for tx in history.entries() {
        table.add_row(vec![
            Cell::new(&tx.timestamp),
            Cell::new(tx.from.to_uppercase()),
            Cell::new(tx.to.to_uppercase()),
            ui::amount_cell(tx.amount),
            ui::amount_cell(tx.result),
        ]);
    }
    table
}

fn print_help() {
    println!("Enter a conversion as: FROM TO [AMOUNT]   (e.g. usd eur 10)");
    println!("Commands: list (currencies), history (last 5), help, quit");
}

async fn handle_conversion<C, R>(session: &mut Session<C, R>, input: &str)
where
    C: CatalogProvider,
    R: RateProvider,
{
    let mut parts = input.split_whitespace();
    let (Some(from), Some(to)) = (parts.next(), parts.next()) else {
        print_help();
        return;
    };
    let amount = parse_amount(parts.next().unwrap_or(""));

    let spinner = ui::new_spinner("Fetching rate...");
    let outcome = session.convert(from, to, amount).await;
    spinner.finish_and_clear();

    match outcome {
        ConversionOutcome::Converted(tx) => {
            println!(
                "{}",
                ui::style_text(&format_transaction(&tx), ui::StyleType::ResultValue)
            );
            println!("{}", ui::style_text("Last 5 Conversions", ui::StyleType::Title));
            println!("{}", history_table(session.history()));
        }
        ConversionOutcome::Unavailable => {
            println!(
                "{}",
                ui::style_text("Conversion rate not available", ui::StyleType::Error)
            );
        }
    }
}

/// Runs the interactive session until `quit` or end of input.
pub async fn run<C, R>(session: &mut Session<C, R>) -> Result<()>
where
    C: CatalogProvider,
    R: RateProvider,
{
    let spinner = ui::new_spinner("Loading currency catalog...");
    session.load_catalog().await;
    spinner.finish_and_clear();

    println!("{}", ui::style_text("Currency Converter", ui::StyleType::Title));
    if session.catalog().is_empty() {
        println!(
            "{}",
            ui::style_text(
                "Currency catalog unavailable; conversions will still be attempted.",
                ui::StyleType::Error
            )
        );
    } else {
        println!(
            "{}",
            ui::style_text(
                &format!("{} currencies available", session.catalog().len()),
                ui::StyleType::Subtle
            )
        );
    }
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("fxconv> ");
        io::stdout().flush()?;
        // End of input ends the session like `quit` does.
        let Some(line) = lines.next() else { break };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => println!("{}", catalog_table(session.catalog())),
            "history" => {
                if session.history().is_empty() {
                    println!("{}", ui::style_text("No conversions yet", ui::StyleType::Subtle));
                } else {
                    println!("{}", history_table(session.history()));
                }
            }
            input => handle_conversion(session, input).await,
        }
    }
    Ok(())
}
