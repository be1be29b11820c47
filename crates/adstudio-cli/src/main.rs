//! AdStudio terminal entry point.
//!
//! Binary name: `adstudio`
//!
//! Parses CLI arguments, sets up tracing, loads config and the seeded mock
//! data, then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, Output, TemplatesCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,adstudio=debug",
        _ => "trace",
    };
    adstudio_observe::tracing_setup::init_tracing(filter, cli.otel)?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "adstudio", &mut std::io::stdout());
        return Ok(());
    }

    let mut state = AppState::init().await?;
    let out = Output::new(cli.json, cli.quiet);

    let result = match cli.command {
        Commands::Design {
            product,
            assets,
            template,
            auto,
        } => {
            let options = cli::design::DesignOptions {
                product,
                assets,
                template,
                auto,
            };
            cli::design::run_designer(&mut state, options, out).await
        }

        Commands::Projects {
            drafts,
            search,
            sort,
            delete,
        } => cli::projects::list_projects(&mut state, drafts, search, &sort, delete, out),

        Commands::Templates { action } => match action {
            TemplatesCommand::List {
                industry,
                style,
                kind,
                search,
            } => cli::templates::list_templates(&state, industry, style, kind, search, out),
            TemplatesCommand::Show { id } => cli::templates::show_template(&state, &id, out),
        },

        Commands::Notifications {
            mark_read,
            read,
            clear,
        } => cli::notifications::show_notifications(&mut state, mark_read, read, clear, out),

        Commands::Billing { buy } => cli::billing::show_billing(&mut state, buy, out),

        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => cli::login::sign_up(&mut state, &name, &email, password, confirm_password, out),

        Commands::Account {
            email,
            password,
            first_name,
            last_name,
            phone,
            two_factor,
            notify,
            logout,
        } => {
            let options = cli::account::AccountOptions {
                email,
                password,
                profile: adstudio_core::account::ProfileUpdate {
                    first_name,
                    last_name,
                    phone,
                },
                two_factor,
                notify,
                logout,
            };
            cli::account::show_account(&mut state, options, out)
        }

        Commands::Support { search, expand } => {
            cli::support::show_support(&mut state, search, expand, out)
        }

        Commands::Login { email, password } => {
            cli::login::login(&mut state, &email, password, out)
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    adstudio_observe::tracing_setup::shutdown_tracing();
    result
}
