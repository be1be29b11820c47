//! Read-mostly catalogs behind the "My Projects" and "Templates" screens.
//!
//! Both are plain in-memory lists seeded by the infra layer; queries filter,
//! search, and sort without touching the underlying order.

pub mod projects;
pub mod templates;

/// Case-insensitive substring match; an empty or blank needle matches all.
pub(crate) fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
