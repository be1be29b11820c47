//! Filesystem adapters for AdStudio.
//!
//! Implements the `AssetSource` trait from `adstudio-core` for files on the
//! local disk, and resolves the data directory that holds `config.toml`.

use std::path::{Path, PathBuf};

use adstudio_core::designer::assets::AssetSource;
use adstudio_types::designer::AssetUpload;
use adstudio_types::error::AssetError;
use tracing::debug;

/// Local filesystem implementation of the `AssetSource` trait.
///
/// Only checks that the file exists and takes its name; the bytes are never
/// read or copied anywhere.
pub struct LocalAssetSource;

impl LocalAssetSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalAssetSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for LocalAssetSource {
    async fn open(&self, location: &str) -> Result<AssetUpload, AssetError> {
        let path = Path::new(location);

        let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AssetError::NotFound(location.to_string()),
            _ => AssetError::FileSystemError(e.to_string()),
        })?;
        if !metadata.is_file() {
            return Err(AssetError::NotFound(location.to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| AssetError::MissingName(location.to_string()))?;

        let absolute = tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf());

        debug!(name = %name, size = metadata.len(), "Local asset opened");
        Ok(AssetUpload::new(name, absolute.display().to_string()))
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `ADSTUDIO_DATA_DIR` environment variable
/// 2. `~/.adstudio`
/// 3. `.adstudio` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ADSTUDIO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".adstudio");
    }

    PathBuf::from(".adstudio")
}

/// Path of `config.toml` inside the data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_open_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("logo.png");
        tokio::fs::write(&file_path, b"not really a png").await.unwrap();

        let upload = LocalAssetSource::new()
            .open(file_path.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(upload.name, "logo.png");
        assert!(upload.location.ends_with("logo.png"));
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.mp4");

        let err = LocalAssetSource::new()
            .open(missing.to_str().unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_open_directory_is_not_an_asset() {
        let dir = tempdir().unwrap();
        let err = LocalAssetSource::new()
            .open(dir.path().to_str().unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var("ADSTUDIO_DATA_DIR", "/tmp/test-adstudio");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-adstudio"));
        assert_eq!(config_path(&dir), PathBuf::from("/tmp/test-adstudio/config.toml"));
        unsafe {
            std::env::remove_var("ADSTUDIO_DATA_DIR");
        }
    }
}
