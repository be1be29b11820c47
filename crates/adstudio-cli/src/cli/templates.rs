//! `adstudio templates`: the template gallery.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use adstudio_core::catalog::templates::{INDUSTRIES, STYLES, prompt_text};
use adstudio_types::template::{TemplateFilter, TemplateKind};

use crate::cli::Output;
use crate::state::AppState;

/// List templates matching the given facets.
pub fn list_templates(
    state: &AppState,
    industry: Option<String>,
    style_facet: Option<String>,
    kind: Option<String>,
    search: Option<String>,
    out: Output,
) -> Result<()> {
    let kind = match kind {
        Some(k) => Some(k.parse::<TemplateKind>().map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };
    let filter = TemplateFilter {
        industry,
        style: style_facet,
        kind,
        search,
    };
    let templates = state.templates.search(&filter);

    if out.json() {
        println!("{}", serde_json::to_string_pretty(&templates)?);
    }
    if !out.text() {
        return Ok(());
    }

    if templates.is_empty() {
        println!();
        println!(
            "  {} No templates match ({} in the gallery).",
            style("i").blue().bold(),
            state.templates.all().len()
        );
        println!("    Industries: {}", style(INDUSTRIES.join(", ")).dim());
        println!("    Styles:     {}", style(STYLES.join(", ")).dim());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Kind").fg(Color::White),
        Cell::new("Industry").fg(Color::White),
        Cell::new("Style").fg(Color::White),
        Cell::new("Scenes").fg(Color::White),
    ]);

    for template in &templates {
        table.add_row(vec![
            Cell::new(&template.id).fg(Color::DarkGrey),
            Cell::new(&template.title).fg(Color::Cyan),
            Cell::new(template.kind),
            Cell::new(&template.industry),
            Cell::new(&template.style),
            Cell::new(template.scenes.len()),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Use one with: {}",
        style("adstudio design --template <id>").yellow()
    );
    println!();

    Ok(())
}

/// Show one template in detail, including the copyable prompt text.
pub fn show_template(state: &AppState, id: &str, out: Output) -> Result<()> {
    let template = state.templates.get(id)?;

    if out.json() {
        println!("{}", serde_json::to_string_pretty(template)?);
    }
    if !out.text() {
        return Ok(());
    }

    println!();
    println!("  {}", style(&template.title).cyan().bold());
    println!("  {}", style(&template.description).dim());
    println!();
    println!("  Kind:     {}", template.kind);
    println!("  Industry: {}", template.industry);
    println!("  Style:    {}", template.style);
    println!();
    println!("  {}", style("Prompt").bold());
    for line in prompt_text(template).lines() {
        println!("    {line}");
    }
    println!();

    Ok(())
}
