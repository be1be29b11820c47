//! `adstudio support`: the help center.

use anyhow::Result;
use console::style;

use adstudio_core::support::{RESOURCES, SUPPORT_CHANNELS};

use crate::cli::Output;
use crate::state::AppState;

/// List FAQs matching `search`, with the one at `expand` (1-based) opened.
pub fn show_support(
    state: &mut AppState,
    search: Option<String>,
    expand: Option<usize>,
    out: Output,
) -> Result<()> {
    if let Some(n) = expand {
        if n == 0 || !state.support.toggle(n - 1) {
            anyhow::bail!("No FAQ #{n} (there are {})", state.support.faq_count());
        }
    }

    let center = &state.support;
    let query = search.unwrap_or_default();
    let faqs = center.search(&query);

    if out.json() {
        let output = serde_json::json!({
            "faqs": faqs.iter().map(|(_, faq)| faq).collect::<Vec<_>>(),
            "expanded": center.expanded().map(|i| i + 1),
            "channels": SUPPORT_CHANNELS,
            "resources": RESOURCES,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    if !out.text() {
        return Ok(());
    }

    println!();
    println!("  {}", style("Frequently Asked Questions").bold());
    println!();
    if faqs.is_empty() {
        println!("  {}", style(format!("No answers match \"{}\"", query.trim())).dim());
        println!();
    }
    for (index, faq) in &faqs {
        let open = center.expanded() == Some(*index);
        let arrow = if open { "▾" } else { "▸" };
        println!(
            "  {} {} {}",
            style(arrow).cyan(),
            style(format!("{}.", index + 1)).dim(),
            faq.question
        );
        if open {
            println!("      {}", style(&faq.answer).dim());
        }
    }
    println!();

    for channel in &SUPPORT_CHANNELS {
        println!(
            "  {}  {}",
            style(channel.name).cyan().bold(),
            style(channel.status).green()
        );
        println!("    {}", style(channel.description).dim());
    }
    println!();
    println!("  Resources: {}", style(RESOURCES.join(" · ")).dim());
    println!();

    Ok(())
}
