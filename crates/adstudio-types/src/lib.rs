//! Shared domain types for AdStudio.
//!
//! This crate contains the core domain types used across the AdStudio
//! dashboard: designer messages and blueprints, projects, templates,
//! notifications, billing, account, support, configuration, and their error
//! types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod account;
pub mod billing;
pub mod config;
pub mod designer;
pub mod error;
pub mod notification;
pub mod project;
pub mod support;
pub mod template;
