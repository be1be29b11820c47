//! Ad designer: the chat-style wizard that assembles an ad blueprint.
//!
//! The agent on the other side of the chat is scripted. `ConversationEngine`
//! decides which canned reply to queue from presence checks on the
//! blueprint, `ReplyScheduler` delivers queued replies after a fixed delay,
//! and `DesignerSession` ties both together with the `AssetRegistry` so that
//! one owner applies every mutation.

pub mod assets;
pub mod blueprint;
pub mod engine;
pub mod log;
pub mod scheduler;
pub mod script;
pub mod session;
