//! Loading `config.toml`.

use std::path::Path;

use adstudio_types::config::StudioConfig;
use adstudio_types::error::ConfigError;
use tracing::{debug, info};

/// Load the studio config from `path`.
///
/// A missing file yields the defaults; an unreadable or malformed one is an
/// error, as is one with a zero delay or rotation period.
pub async fn load_config(path: &Path) -> Result<StudioConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file; using defaults");
            return Ok(StudioConfig::default());
        }
        Err(e) => return Err(ConfigError::Read(e.to_string())),
    };

    let config: StudioConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    info!(path = %path.display(), "Config loaded");
    Ok(config)
}
