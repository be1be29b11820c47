//! Span attribute names for designer sessions.
//!
//! Usable with `Span::record` against spans declared with the matching
//! dotted field names.

/// UUID of the designer session.
pub const SESSION_ID: &str = "adstudio.session.id";

/// Current phase of the designer (`composing` or `generating`).
pub const DESIGNER_PHASE: &str = "adstudio.designer.phase";

/// Number of chat messages in the session log.
pub const MESSAGE_COUNT: &str = "adstudio.designer.messages";

/// Title of the blueprint being composed.
pub const BLUEPRINT_TITLE: &str = "adstudio.blueprint.title";

/// Number of scenes in the blueprint.
pub const BLUEPRINT_SCENES: &str = "adstudio.blueprint.scenes";

/// Number of assets registered with the session.
pub const ASSET_COUNT: &str = "adstudio.blueprint.assets";

/// Credits remaining after a generation is charged.
pub const CREDITS_REMAINING: &str = "adstudio.billing.credits_remaining";
