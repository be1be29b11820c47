//! Application state wiring config, mock data, and services together.

use anyhow::Context;
use chrono::Utc;

use adstudio_core::account::AccountSettings;
use adstudio_core::auth::AuthService;
use adstudio_core::billing::CreditLedger;
use adstudio_core::catalog::projects::ProjectCatalog;
use adstudio_core::catalog::templates::TemplateGallery;
use adstudio_core::notification::NotificationCenter;
use adstudio_core::support::SupportCenter;
use adstudio_infra::config::load_config;
use adstudio_infra::filesystem::{LocalAssetSource, config_path, resolve_data_dir};
use adstudio_infra::mock;
use adstudio_types::config::StudioConfig;

/// Everything a command handler needs.
///
/// All lists are in memory and start from the seeded fixtures on every run.
pub struct AppState {
    pub config: StudioConfig,
    pub projects: ProjectCatalog,
    pub templates: TemplateGallery,
    pub notifications: NotificationCenter,
    pub ledger: CreditLedger,
    pub auth: AuthService,
    pub account: AccountSettings,
    pub support: SupportCenter,
    pub asset_source: LocalAssetSource,
}

impl AppState {
    /// Load config from the data directory and seed the mock data.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&config_path(&data_dir))
            .await
            .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;

        Ok(Self {
            projects: ProjectCatalog::new(mock::seed_projects()),
            templates: TemplateGallery::new(mock::seed_templates()),
            notifications: NotificationCenter::new(mock::seed_notifications(Utc::now())),
            ledger: CreditLedger::new(&config, mock::seed_transactions()),
            auth: AuthService::new(&config.auth),
            account: AccountSettings::new(mock::seed_profile()),
            support: SupportCenter::new(mock::seed_faqs()),
            asset_source: LocalAssetSource::new(),
            config,
        })
    }
}
