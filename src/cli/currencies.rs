use super::ui;
use crate::core::catalog::{Catalog, CatalogProvider};
use crate::core::rate::RateProvider;
use crate::core::session::Session;
use anyhow::Result;
use comfy_table::{Cell, Table};

/// Renders the catalog as a code/name table, codes sorted.
pub fn catalog_table(catalog: &Catalog) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Currency")]);

    let mut codes: Vec<_> = catalog.keys().collect();
    codes.sort();
    for code in codes {
        table.add_row(vec![
            Cell::new(code.to_uppercase()),
            Cell::new(&catalog[code]),
        ]);
    }
    table
}

/// Fetches and lists the supported currencies.
pub async fn run<C, R>(session: &mut Session<C, R>) -> Result<()>
where
    C: CatalogProvider,
    R: RateProvider,
{
    let spinner = ui::new_spinner("Fetching currency catalog...");
    session.load_catalog().await;
    spinner.finish_and_clear();

    if session.catalog().is_empty() {
        println!(
            "{}",
            ui::style_text("No currencies available", ui::StyleType::Error)
        );
        return Ok(());
    }

    println!("{}", ui::style_text("Supported Currencies", ui::StyleType::Title));
    println!("{}", catalog_table(session.catalog()));
    Ok(())
}
