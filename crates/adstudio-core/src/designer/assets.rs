//! Asset registry and the `AssetSource` port.
//!
//! Uploads never leave the machine: registering an asset only records its
//! name and hands back a local preview handle, the way a browser hands out
//! object URLs for picked files. No size or type validation happens here.

use adstudio_types::designer::{AssetHandle, AssetUpload};
use adstudio_types::error::AssetError;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

/// Resolves a user-picked location into an `AssetUpload`.
///
/// Implementations live in adstudio-infra (e.g., `LocalAssetSource`).
pub trait AssetSource: Send + Sync {
    fn open(
        &self,
        location: &str,
    ) -> impl std::future::Future<Output = Result<AssetUpload, AssetError>> + Send;
}

/// An upload known to the registry.
#[derive(Debug, Clone)]
pub struct RegisteredAsset {
    pub name: String,
    pub location: String,
    pub handle: AssetHandle,
    pub registered_at: DateTime<Utc>,
    pub revoked: bool,
}

/// Ordered list of uploaded assets for one designer session.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: Vec<RegisteredAsset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an upload and return its preview handle.
    pub fn register(&mut self, upload: AssetUpload) -> AssetHandle {
        let handle = AssetHandle(format!("blob:adstudio/{}", Uuid::now_v7()));
        debug!(name = %upload.name, handle = %handle, "Asset registered");
        self.assets.push(RegisteredAsset {
            name: upload.name,
            location: upload.location,
            handle: handle.clone(),
            registered_at: Utc::now(),
            revoked: false,
        });
        handle
    }

    /// Asset names in upload order (revoked ones included).
    pub fn names(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.name.as_str()).collect()
    }

    /// Look up a live handle. Revoked handles no longer resolve.
    pub fn resolve(&self, handle: &AssetHandle) -> Option<&RegisteredAsset> {
        self.assets
            .iter()
            .find(|a| &a.handle == handle && !a.revoked)
    }

    /// Invalidate every preview handle (session teardown).
    pub fn revoke_all(&mut self) -> usize {
        let mut count = 0;
        for asset in self.assets.iter_mut().filter(|a| !a.revoked) {
            asset.revoked = true;
            count += 1;
        }
        count
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> AssetUpload {
        AssetUpload::new(name, format!("/tmp/{name}"))
    }

    #[test]
    fn test_register_keeps_upload_order() {
        let mut registry = AssetRegistry::new();
        for name in ["a.png", "b.png", "c.png"] {
            registry.register(upload(name));
        }
        assert_eq!(registry.names(), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_handles_are_unique_and_resolve() {
        let mut registry = AssetRegistry::new();
        let first = registry.register(upload("logo.png"));
        let second = registry.register(upload("logo.png"));

        assert_ne!(first, second);
        assert!(first.as_str().starts_with("blob:adstudio/"));
        assert_eq!(registry.resolve(&first).unwrap().location, "/tmp/logo.png");
    }

    #[test]
    fn test_revoke_all_counts_live_handles() {
        let mut registry = AssetRegistry::new();
        let handle = registry.register(upload("a.png"));
        registry.register(upload("b.png"));

        assert_eq!(registry.revoke_all(), 2);
        assert!(registry.resolve(&handle).is_none());
        assert_eq!(registry.revoke_all(), 0);
        // Names stay listed after revocation
        assert_eq!(registry.names(), vec!["a.png", "b.png"]);
    }
}
