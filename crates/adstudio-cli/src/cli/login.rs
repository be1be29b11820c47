//! `adstudio login` and `adstudio signup`: the mock auth modal.

use anyhow::Result;
use console::style;
use dialoguer::Password;

use adstudio_types::account::{Credentials, SignUp, User};

use crate::cli::Output;
use crate::state::AppState;

pub fn login(state: &mut AppState, email: &str, password: Option<String>, out: Output) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let user = state.auth.login(&Credentials::new(email, password))?;
    print_signed_in(user, out)
}

/// Create an account. Both passwords are prompted for when not given.
pub fn sign_up(
    state: &mut AppState,
    name: &str,
    email: &str,
    password: Option<String>,
    confirm_password: Option<String>,
    out: Output,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };
    let confirm_password = match confirm_password {
        Some(p) => p,
        None => Password::new().with_prompt("Confirm password").interact()?,
    };

    let user = state
        .auth
        .sign_up(&SignUp::new(name, email, password, confirm_password))?;
    print_signed_in(user, out)
}

fn print_signed_in(user: &User, out: Output) -> Result<()> {
    if out.json() {
        println!("{}", serde_json::to_string_pretty(user)?);
    }
    if !out.text() {
        return Ok(());
    }

    println!();
    println!(
        "  {} Signed in as {} ({})",
        style("✓").green().bold(),
        style(&user.name).cyan().bold(),
        user.email
    );
    println!();

    Ok(())
}
