//! Interactive ad designer (`adstudio design`).
//!
//! Drives a `DesignerSession`: prints the chat as it grows, waits out the
//! agent's typing delay behind a spinner, and shows the generating view with
//! rotating captions once the user asks for a draft.

use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{Instrument, field, info, info_span, warn};

use adstudio_core::designer::assets::AssetSource;
use adstudio_core::designer::blueprint::{BlueprintPanel, blueprint_from_template};
use adstudio_core::designer::script::loading_caption;
use adstudio_core::designer::session::DesignerSession;
use adstudio_observe::attrs;
use adstudio_types::designer::{DesignerMessage, DesignerPhase, MessageKind, MessageSender};
use adstudio_types::error::BillingError;
use adstudio_types::notification::NotificationKind;

use crate::cli::Output;
use crate::state::AppState;

/// Flags given to `adstudio design`.
pub struct DesignOptions {
    pub product: Option<String>,
    pub assets: Vec<String>,
    pub template: Option<String>,
    pub auto: bool,
}

const HELP: &str = "Commands: /upload <path>  /generate  /title <name>  /reset  /blueprint  /quit";

/// Run the designer conversation until the user generates or quits.
pub async fn run_designer(state: &mut AppState, options: DesignOptions, out: Output) -> Result<()> {
    let mut session = match &options.template {
        Some(id) => {
            let template = state.templates.get(id)?;
            DesignerSession::with_blueprint(&state.config, blueprint_from_template(template))
        }
        None => DesignerSession::new(&state.config),
    };

    let span = info_span!(
        "designer.session",
        adstudio.session.id = %session.id(),
        adstudio.designer.phase = field::Empty,
        adstudio.designer.messages = field::Empty,
        adstudio.blueprint.title = field::Empty,
        adstudio.blueprint.scenes = field::Empty,
        adstudio.blueprint.assets = field::Empty,
        adstudio.billing.credits_remaining = field::Empty,
    );

    let result = drive(state, &mut session, &options, out)
        .instrument(span.clone())
        .await;

    let phase = session.phase().to_string();
    let blueprint = session.blueprint();
    span.record(attrs::DESIGNER_PHASE, phase.as_str());
    span.record(attrs::MESSAGE_COUNT, session.messages().len());
    span.record(attrs::BLUEPRINT_TITLE, blueprint.title.as_str());
    span.record(attrs::BLUEPRINT_SCENES, blueprint.scenes.len());
    span.record(attrs::ASSET_COUNT, session.assets().len());

    if out.json() && result.is_ok() {
        let output = serde_json::json!({
            "session_id": session.id().to_string(),
            "phase": session.phase(),
            "blueprint": session.blueprint(),
            "messages": session.messages(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    session.shutdown();
    result
}

async fn drive(
    state: &mut AppState,
    session: &mut DesignerSession,
    options: &DesignOptions,
    out: Output,
) -> Result<()> {
    let mut seen = 0;
    render_new(session, &mut seen, out);

    if let Some(product) = &options.product {
        session.submit_user_text(product);
        render_new(session, &mut seen, out);
        await_replies(session, out).await?;
        render_new(session, &mut seen, out);
    }

    for location in &options.assets {
        attach(state, session, location).await?;
        render_new(session, &mut seen, out);
        await_replies(session, out).await?;
        render_new(session, &mut seen, out);
    }

    if options.auto {
        return generate(state, session, &mut seen, out).await;
    }

    if out.text() {
        println!("  {}", style(HELP).dim());
        println!();
    }

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Help if out.text() => println!("  {}", style(HELP).dim()),
            Command::Blueprint if out.text() => print_panel(&session.panel()),
            Command::Help | Command::Blueprint => {}
            Command::Title(title) => {
                session.rename(title);
                if out.text() {
                    println!("  {} Title set to {}", style("✓").green(), style(title).cyan());
                }
            }
            Command::Reset => {
                session.reset_blueprint();
                if out.text() {
                    println!("  {} Blueprint reset", style("✓").green());
                }
            }
            Command::Upload(location) => {
                if let Err(e) = attach(state, session, location).await {
                    println!("  {} {e:#}", style("✗").red());
                    continue;
                }
            }
            Command::Generate => {
                if !session.can_generate() {
                    println!(
                        "  {} Tell me about your product first.",
                        style("i").blue().bold()
                    );
                    continue;
                }
                return generate(state, session, &mut seen, out).await;
            }
            Command::Unknown(cmd) => {
                println!("  {} Unknown command: {cmd}", style("✗").red());
                continue;
            }
            Command::Text(text) => session.submit_user_text(text),
        }

        render_new(session, &mut seen, out);
        await_replies(session, out).await?;
        render_new(session, &mut seen, out);
    }

    info!(session_id = %session.id(), "Designer closed before generating");
    Ok(())
}

/// Open a local file and register it with the session.
async fn attach(state: &AppState, session: &mut DesignerSession, location: &str) -> Result<()> {
    let upload = state
        .asset_source
        .open(location)
        .await
        .with_context(|| format!("Cannot attach '{location}'"))?;
    session.submit_asset(upload);
    Ok(())
}

/// Charge credits, enter the generating view, and show the finished draft.
async fn generate(
    state: &mut AppState,
    session: &mut DesignerSession,
    seen: &mut usize,
    out: Output,
) -> Result<()> {
    if !session.can_generate() {
        anyhow::bail!("Nothing to generate yet: name the product first (--product)");
    }

    let title = session.blueprint().title.clone();
    if let Err(e) = state.ledger.charge_generation(&title).map(|_| ()) {
        if matches!(e, BillingError::InsufficientCredits { .. }) {
            warn!(balance = state.ledger.balance(), "Generation blocked");
            return Err(e).context("Buy more credits with `adstudio billing --buy 50`");
        }
        return Err(e.into());
    }
    tracing::Span::current().record(attrs::CREDITS_REMAINING, state.ledger.balance());

    session.request_generation();
    render_new(session, seen, out);

    if session.phase() == DesignerPhase::Generating {
        show_generating_view(session, &title, state.config.loading_rotation(), out).await?;
    }

    state.notifications.push(
        NotificationKind::Video,
        format!("Your ad \"{title}\" has finished generating!"),
        Some("/my-projects".to_string()),
    );
    if state.ledger.is_low() {
        state.notifications.push(
            NotificationKind::Alert,
            format!("Your credits are low ({} remaining)", state.ledger.balance()),
            Some("/billing".to_string()),
        );
    }

    if out.text() {
        print_panel(&session.panel());
        println!(
            "  {} credits remaining  ·  {} unread notification{}",
            style(state.ledger.balance()).bold(),
            state.notifications.unread_count(),
            if state.notifications.unread_count() == 1 { "" } else { "s" }
        );
        println!();
    }
    Ok(())
}

/// The generating screen: title plus captions rotating on a fixed interval
/// while the AI defaults are filled in.
async fn show_generating_view(
    session: &mut DesignerSession,
    title: &str,
    rotation: Duration,
    out: Output,
) -> Result<()> {
    let spinner = if !out.text() {
        ProgressBar::hidden()
    } else {
        println!();
        println!("  {}", style(format!("Generating \"{title}\"")).magenta().bold());
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut ticker = tokio::time::interval(rotation);
    let mut tick = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                spinner.set_message(loading_caption(tick));
                tick += 1;
            }
            applied = session.next_effect() => {
                if applied.is_none() {
                    break;
                }
            }
        }
        if session.pending_effects() == 0 {
            break;
        }
    }

    spinner.finish_and_clear();
    Ok(())
}

/// Wait for scheduled agent replies behind a typing spinner.
async fn await_replies(session: &mut DesignerSession, out: Output) -> Result<()> {
    if session.pending_effects() == 0 {
        return Ok(());
    }

    let spinner = if !out.text() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("AdStudio is typing...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    session.settle().await;

    spinner.finish_and_clear();
    Ok(())
}

/// Print messages appended since the last call.
fn render_new(session: &DesignerSession, seen: &mut usize, out: Output) {
    let fresh = session.messages_since(*seen);
    if out.text() {
        for message in fresh {
            print_message(message);
        }
    }
    *seen += fresh.len();
}

fn print_message(message: &DesignerMessage) {
    let who = match message.sender {
        MessageSender::Agent => style("AdStudio").cyan().bold(),
        MessageSender::User => style("You").green().bold(),
    };
    let body = match message.kind {
        MessageKind::Asset => format!("📎 {}", style(&message.content).underlined()),
        MessageKind::Text => message.content.clone(),
    };
    println!("  {who} {}", style(message.created_at.format("%H:%M")).dim());
    for line in body.lines() {
        println!("    {line}");
    }
    println!();
}

fn print_panel(panel: &BlueprintPanel) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Ad Blueprint").fg(Color::White),
        Cell::new(&panel.title).fg(Color::Cyan),
    ]);

    for field in &panel.fields {
        let value = match field.hint {
            Some(hint) => format!("{}\n{}", field.value, style(hint).dim()),
            None => field.value.clone(),
        };
        table.add_row(vec![Cell::new(field.label).fg(Color::DarkGrey), Cell::new(value)]);
    }

    let assets = match panel.assets_placeholder {
        Some(placeholder) => style(placeholder).dim().to_string(),
        None => panel.assets.join("\n"),
    };
    table.add_row(vec![Cell::new("Brand Assets").fg(Color::DarkGrey), Cell::new(assets)]);

    let scenes = match panel.scenes_placeholder {
        Some(placeholder) => style(placeholder).dim().to_string(),
        None => panel
            .scenes
            .iter()
            .enumerate()
            .map(|(i, scene)| {
                format!(
                    "{} {}\n  Visual: {}\n  Voice-over: {}",
                    style("Scene").bold(),
                    i + 1,
                    scene.visual,
                    scene.voice_over
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    table.add_row(vec![Cell::new("Scenes").fg(Color::DarkGrey), Cell::new(scenes)]);

    println!();
    println!("{table}");
    println!();
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Text(&'a str),
    Upload(&'a str),
    Title(&'a str),
    Generate,
    Reset,
    Blueprint,
    Help,
    Quit,
    Unknown(&'a str),
}

/// Whitespace is trimmed only to spot commands; plain text comes back as typed.
fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Text(line);
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "upload" | "asset" if !arg.is_empty() => Command::Upload(arg),
        "title" if !arg.is_empty() => Command::Title(arg),
        "generate" | "go" => Command::Generate,
        "reset" => Command::Reset,
        "blueprint" | "bp" => Command::Blueprint,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_message() {
        assert_eq!(parse_command("Cold brew coffee"), Command::Text("Cold brew coffee"));
        assert_eq!(parse_command(""), Command::Text(""));
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        assert_eq!(parse_command("  Cold brew "), Command::Text("  Cold brew "));
        assert_eq!(parse_command("   "), Command::Text("   "));
        assert_eq!(parse_command("  /quit "), Command::Quit);
        assert_eq!(parse_command(" /dance "), Command::Unknown("/dance"));
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(parse_command("/generate"), Command::Generate);
        assert_eq!(parse_command("/quit"), Command::Quit);
        assert_eq!(parse_command("/upload  ./logo.png "), Command::Upload("./logo.png"));
        assert_eq!(parse_command("/title Summer Sale"), Command::Title("Summer Sale"));
    }

    #[test]
    fn test_commands_missing_arguments_are_unknown() {
        assert_eq!(parse_command("/upload"), Command::Unknown("/upload"));
        assert_eq!(parse_command("/title"), Command::Unknown("/title"));
        assert_eq!(parse_command("/dance"), Command::Unknown("/dance"));
    }
}
