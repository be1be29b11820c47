//! CLI command definitions for the `adstudio` binary.
//!
//! Uses clap derive macros for argument parsing. Each screen of the
//! dashboard maps to one subcommand.

pub mod account;
pub mod billing;
pub mod design;
pub mod login;
pub mod notifications;
pub mod projects;
pub mod support;
pub mod templates;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use adstudio_types::account::NotificationPreference;

/// Where a handler's results go, from the global `--json` and `--quiet` flags.
///
/// Errors are returned to `main` and always reported; this only governs
/// regular output.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
    quiet: bool,
}

impl Output {
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Print a JSON document.
    pub fn json(self) -> bool {
        self.json && !self.quiet
    }

    /// Print styled text, tables, and spinners.
    pub fn text(self) -> bool {
        !self.json && !self.quiet
    }
}

/// Design video ads in a guided conversation.
#[derive(Parser)]
#[command(name = "adstudio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "ADSTUDIO_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the ad designer conversation.
    #[command(alias = "new")]
    Design {
        /// Answer the opening question with this product or service.
        #[arg(long)]
        product: Option<String>,

        /// Attach a file as a brand asset (repeatable).
        #[arg(long = "asset", value_name = "PATH")]
        assets: Vec<String>,

        /// Start from a gallery template instead of a blank blueprint.
        #[arg(long)]
        template: Option<String>,

        /// Generate straight away without prompting.
        #[arg(long)]
        auto: bool,
    },

    /// List your projects or drafts.
    #[command(alias = "ls")]
    Projects {
        /// Show the drafts tab instead of projects.
        #[arg(long)]
        drafts: bool,

        /// Case-insensitive title search.
        #[arg(long)]
        search: Option<String>,

        /// Sort order: date (newest first) or name.
        #[arg(long, default_value = "date")]
        sort: String,

        /// Delete the project with this id before listing.
        #[arg(long, value_name = "ID")]
        delete: Option<String>,
    },

    /// Browse the template gallery.
    Templates {
        #[command(subcommand)]
        action: TemplatesCommand,
    },

    /// Show the notification center.
    Notifications {
        /// Mark every notification as read.
        #[arg(long)]
        mark_read: bool,

        /// Mark a single notification as read.
        #[arg(long, value_name = "ID")]
        read: Option<String>,

        /// Remove all notifications.
        #[arg(long)]
        clear: bool,
    },

    /// Show credit balance, packages, and history.
    Billing {
        /// Buy the package with this many credits (50, 150, or 500).
        #[arg(long, value_name = "CREDITS")]
        buy: Option<u32>,
    },

    /// Create an account (signs straight in).
    Signup {
        /// Display name.
        #[arg(long)]
        name: String,

        /// Account email.
        #[arg(long)]
        email: String,

        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,

        /// Password again (prompted when omitted).
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Show and edit account settings.
    Account {
        /// Sign in with this email first.
        #[arg(long)]
        email: Option<String>,

        /// Password for --email (prompted when omitted).
        #[arg(long, requires = "email")]
        password: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Turn two-factor authentication on or off.
        #[arg(long, value_name = "on|off", value_parser = account::parse_switch)]
        two_factor: Option<bool>,

        /// Email preference toggle, e.g. `billing=off` (repeatable).
        /// Preferences: video, platform, billing.
        #[arg(long, value_name = "PREF=on|off", value_parser = account::parse_toggle)]
        notify: Vec<(NotificationPreference, bool)>,

        /// Sign out when done.
        #[arg(long)]
        logout: bool,
    },

    /// Help center: FAQs and contact options.
    #[command(alias = "help-center")]
    Support {
        /// Filter FAQs by question or answer text.
        #[arg(long)]
        search: Option<String>,

        /// Expand the FAQ with this number.
        #[arg(long, value_name = "N")]
        expand: Option<usize>,
    },

    /// Sign in with email and password.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,

        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TemplatesCommand {
    /// List templates, optionally filtered.
    #[command(alias = "ls")]
    List {
        /// Industry facet (e.g. Technology, Fitness).
        #[arg(long)]
        industry: Option<String>,

        /// Style facet (e.g. Minimalist, Dynamic).
        #[arg(long)]
        style: Option<String>,

        /// Kind: full-ad, scene, or prompt-set.
        #[arg(long)]
        kind: Option<String>,

        /// Search title and description.
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a template's scenes and prompt text.
    Show {
        /// Template id.
        id: String,
    },
}
