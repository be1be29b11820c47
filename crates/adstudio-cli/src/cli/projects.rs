//! `adstudio projects`: the "My Projects" screen.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use adstudio_core::catalog::projects::{ProjectQuery, empty_state_message};
use adstudio_types::project::{ProjectSort, ProjectStatus, ProjectTab};

use crate::cli::Output;
use crate::state::AppState;

/// List projects (or drafts), optionally deleting one first.
pub fn list_projects(
    state: &mut AppState,
    drafts: bool,
    search: Option<String>,
    sort: &str,
    delete: Option<String>,
    out: Output,
) -> Result<()> {
    let sort = sort.parse::<ProjectSort>().map_err(|e| anyhow::anyhow!(e))?;

    if let Some(id) = delete {
        let removed = state.projects.delete(&id)?;
        if out.text() {
            println!();
            println!(
                "  {} Deleted project '{}'",
                style("✓").green().bold(),
                style(&removed.title).cyan()
            );
        }
    }

    let tab = if drafts {
        ProjectTab::Drafts
    } else {
        ProjectTab::Projects
    };
    let query = ProjectQuery { tab, search, sort };
    let projects = state.projects.list(&query);

    if out.json() {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    }
    if !out.text() {
        return Ok(());
    }

    if projects.is_empty() {
        println!();
        println!("  {} {}", style("i").blue().bold(), empty_state_message(tab));
        println!("    Start one with: {}", style("adstudio design").yellow());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Status").fg(Color::White),
        Cell::new("Scenes").fg(Color::White),
        Cell::new("Duration").fg(Color::White),
        Cell::new("Last Modified").fg(Color::White),
    ]);

    for project in &projects {
        let status_cell = match project.status {
            ProjectStatus::Completed => Cell::new("● completed").fg(Color::Green),
            ProjectStatus::Generating => Cell::new("◐ generating").fg(Color::Yellow),
            ProjectStatus::Draft => Cell::new("○ draft").fg(Color::DarkGrey),
        };

        table.add_row(vec![
            Cell::new(&project.id).fg(Color::DarkGrey),
            Cell::new(&project.title).fg(Color::Cyan),
            status_cell,
            Cell::new(project.scenes),
            Cell::new(&project.duration),
            Cell::new(project.last_modified.format("%b %-d, %Y")).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} project{}",
        style(projects.len()).bold(),
        if projects.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}
