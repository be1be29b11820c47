//! `adstudio notifications`: the bell menu.

use anyhow::Result;
use chrono::Utc;
use console::style;

use adstudio_core::notification::format_relative;
use adstudio_types::notification::NotificationKind;

use crate::cli::Output;
use crate::state::AppState;

pub fn show_notifications(
    state: &mut AppState,
    mark_all: bool,
    mark_one: Option<String>,
    clear: bool,
    out: Output,
) -> Result<()> {
    if let Some(id) = mark_one {
        if !state.notifications.mark_read(&id) {
            anyhow::bail!("Notification '{id}' not found");
        }
    }
    if mark_all {
        state.notifications.mark_all_read();
    }
    if clear {
        state.notifications.clear_all();
    }

    let center = &state.notifications;

    if out.json() {
        let output = serde_json::json!({
            "unread": center.unread_count(),
            "notifications": center.notifications(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }
    if !out.text() {
        return Ok(());
    }

    println!();
    println!(
        "  {} Notifications ({} unread)",
        style("🔔").bold(),
        style(center.unread_count()).yellow().bold()
    );
    println!();

    if center.notifications().is_empty() {
        println!("  {}", style("No notifications").dim());
        println!();
        return Ok(());
    }

    let now = Utc::now();
    for n in center.notifications() {
        let icon = match n.kind {
            NotificationKind::Video => "▶",
            NotificationKind::Billing => "$",
            NotificationKind::Template => "✦",
            NotificationKind::Alert => "!",
        };
        let marker = if n.read {
            style(" ").dim()
        } else {
            style("●").blue()
        };
        let message = if n.read {
            style(n.message.as_str()).dim()
        } else {
            style(n.message.as_str()).white()
        };

        println!("  {marker} {icon} {message}");
        println!(
            "      {}  {}",
            style(format_relative(n.timestamp, now)).dim(),
            style(format!("#{}", n.id)).dim()
        );
    }
    println!();

    Ok(())
}
