//! `adstudio account`: profile, security, plan, and email preferences.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Password;

use adstudio_core::account::{PAYMENT_METHOD, PLAN_NAME, ProfileUpdate};
use adstudio_types::account::{Credentials, NotificationPreference};

use crate::cli::Output;
use crate::state::AppState;

/// Flags given to `adstudio account`.
pub struct AccountOptions {
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile: ProfileUpdate,
    pub two_factor: Option<bool>,
    pub notify: Vec<(NotificationPreference, bool)>,
    pub logout: bool,
}

/// Parse an on/off switch value.
pub fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on or off, got '{other}'")),
    }
}

/// Parse a `--notify` value such as `billing=off`.
pub fn parse_toggle(raw: &str) -> Result<(NotificationPreference, bool), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <preference>=on|off, got '{raw}'"))?;
    let pref = name.trim().parse::<NotificationPreference>()?;
    Ok((pref, parse_switch(value)?))
}

pub fn show_account(state: &mut AppState, options: AccountOptions, out: Output) -> Result<()> {
    if let Some(email) = &options.email {
        let password = match options.password {
            Some(p) => p,
            None => Password::new().with_prompt("Password").interact()?,
        };
        state.auth.login(&Credentials::new(email, password))?;
    }

    if !options.profile.is_empty() {
        state.account.update_profile(options.profile)?;
    }
    if let Some(enabled) = options.two_factor {
        state.account.set_two_factor(enabled);
    }
    for (pref, enabled) in options.notify {
        state.account.set_preference(pref, enabled);
    }

    let account = &state.account;
    let signed_in = state.auth.current_user().ok().cloned();

    if out.json() {
        let output = serde_json::json!({
            "user": signed_in,
            "profile": account.profile(),
            "two_factor": account.two_factor(),
            "notifications": account.preferences(),
            "plan": PLAN_NAME,
            "credits": state.ledger.balance(),
            "payment_method": PAYMENT_METHOD,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if out.text() {
        let profile = account.profile();
        println!();
        if let Some(user) = &signed_in {
            println!(
                "  {} Signed in as {} ({})",
                style("✓").green().bold(),
                style(&user.name).cyan().bold(),
                user.email
            );
            println!();
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Account").fg(Color::White),
            Cell::new(profile.full_name()).fg(Color::Cyan),
        ]);
        let rows = [
            ("Email", profile.email.clone()),
            ("Phone", profile.phone.clone()),
            (
                "Two-factor",
                if account.two_factor() { "on" } else { "off" }.to_string(),
            ),
            ("Plan", PLAN_NAME.to_string()),
            ("Credits", state.ledger.balance().to_string()),
            ("Payment", PAYMENT_METHOD.to_string()),
        ];
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label).fg(Color::DarkGrey), Cell::new(value)]);
        }
        println!("{table}");
        println!();

        println!("  {}", style("Email notifications").bold());
        for pref in NotificationPreference::ALL {
            let mark = if account.preferences().get(pref) {
                style("●").green()
            } else {
                style("○").dim()
            };
            println!(
                "  {mark} {}  {}",
                pref.label(),
                style(format!("{} ({pref})", pref.description())).dim()
            );
        }
        println!();
    }

    if options.logout {
        state.auth.logout();
        if out.text() {
            println!("  {} Signed out", style("✓").green().bold());
            println!();
        }
    }

    Ok(())
}
