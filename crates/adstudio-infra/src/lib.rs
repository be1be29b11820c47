//! Infrastructure layer for AdStudio.
//!
//! Contains the adapters behind the ports defined in `adstudio-core`: the
//! local-file `AssetSource`, data directory and `config.toml` resolution,
//! and the seeded mock data that stands in for a backend.

pub mod config;
pub mod filesystem;
pub mod mock;
