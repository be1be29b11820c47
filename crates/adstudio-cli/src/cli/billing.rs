//! `adstudio billing`: credit balance, packages, and history.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use adstudio_types::billing::TransactionStatus;

use crate::cli::Output;
use crate::state::AppState;

pub fn show_billing(state: &mut AppState, buy: Option<u32>, out: Output) -> Result<()> {
    if let Some(credits) = buy {
        let tx = state.ledger.purchase(credits)?;
        if out.text() {
            println!();
            println!(
                "  {} {} (${})",
                style("✓").green().bold(),
                tx.description,
                tx.amount_usd
            );
        }
    }

    let ledger = &state.ledger;

    if out.json() {
        let output = serde_json::json!({
            "balance": ledger.balance(),
            "low": ledger.is_low(),
            "generation_cost": ledger.generation_cost(),
            "packages": ledger.packages(),
            "history": ledger.history(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    if !out.text() {
        return Ok(());
    }

    println!();
    println!(
        "  Available credits: {}  ({} per generation)",
        style(ledger.balance()).cyan().bold(),
        ledger.generation_cost()
    );
    if ledger.is_low() {
        println!(
            "  {} Your credits are running low",
            style("!").yellow().bold()
        );
    }
    println!();

    let mut packages = Table::new();
    packages.load_preset(presets::UTF8_FULL_CONDENSED);
    packages.set_content_arrangement(ContentArrangement::Dynamic);
    packages.set_header(vec![
        Cell::new("Credits").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("").fg(Color::White),
    ]);
    for package in ledger.packages() {
        packages.add_row(vec![
            Cell::new(package.credits).fg(Color::Cyan),
            Cell::new(format!("${}", package.price_usd)),
            Cell::new(package.label.as_deref().unwrap_or("")).fg(Color::Magenta),
        ]);
    }
    println!("{packages}");
    println!();

    if ledger.history().is_empty() {
        println!("  {}", style("No transactions yet").dim());
        println!();
        return Ok(());
    }

    let mut history = Table::new();
    history.load_preset(presets::UTF8_FULL_CONDENSED);
    history.set_content_arrangement(ContentArrangement::Dynamic);
    history.set_header(vec![
        Cell::new("Date").fg(Color::White),
        Cell::new("Description").fg(Color::White),
        Cell::new("Amount").fg(Color::White),
        Cell::new("Credits").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);
    for tx in ledger.history() {
        let credits_color = if tx.credits > 0 {
            Color::Green
        } else {
            Color::Red
        };
        let status_cell = match tx.status {
            TransactionStatus::Completed => Cell::new("completed").fg(Color::Green),
            TransactionStatus::Pending => Cell::new("pending").fg(Color::Yellow),
            TransactionStatus::Failed => Cell::new("failed").fg(Color::Red),
        };
        history.add_row(vec![
            Cell::new(tx.date.format("%Y-%m-%d")).fg(Color::DarkGrey),
            Cell::new(&tx.description),
            Cell::new(format!("${}", tx.amount_usd)),
            Cell::new(tx.credits_display()).fg(credits_color),
            status_cell,
        ]);
    }
    println!("{history}");
    println!();

    Ok(())
}
