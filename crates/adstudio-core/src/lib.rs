//! Business logic for AdStudio.
//!
//! This crate holds the designer conversation engine and the state engines
//! behind the dashboard screens. It defines the `AssetSource` port that the
//! infrastructure layer implements and depends only on `adstudio-types` --
//! never on `adstudio-infra` or any filesystem crate.

pub mod account;
pub mod auth;
pub mod billing;
pub mod catalog;
pub mod designer;
pub mod notification;
pub mod support;
