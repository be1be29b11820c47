//! Conversation engine for the ad designer.
//!
//! `ConversationEngine` owns the message log and the blueprint. Each user
//! event appends to the log immediately and returns the scripted follow-ups
//! as `Deferred` effects; the caller decides how to wait for them (see
//! `DesignerSession`) and hands each one back through `apply()`.
//!
//! The script is intentionally shallow: only the first text turn (the
//! product name) gets a reply. Later text turns are logged and nothing else
//! happens.

use std::time::Duration;

use adstudio_types::config::StudioConfig;
use adstudio_types::designer::{
    AssetHandle, Blueprint, DesignerMessage, DesignerPhase, MessageId, MessageSender,
};
use tracing::{debug, info};

use super::blueprint::BlueprintExt;
use super::log::MessageLog;
use super::script::{self, AiDefaults};

/// A scripted effect waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredEffect {
    /// Append an agent message with this text.
    AgentReply(String),
    /// Write the AI-suggested fields into the blueprint.
    ApplyAiDefaults(AiDefaults),
}

/// A `DeferredEffect` paired with how long to wait before applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub effect: DeferredEffect,
}

/// What applying a deferred effect changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedEffect {
    AgentReplied(MessageId),
    DefaultsApplied,
}

/// Delays for the scripted agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineTimings {
    pub reply_delay: Duration,
    pub generation_delay: Duration,
}

impl Default for EngineTimings {
    fn default() -> Self {
        Self::from(&StudioConfig::default())
    }
}

impl From<&StudioConfig> for EngineTimings {
    fn from(config: &StudioConfig) -> Self {
        Self {
            reply_delay: config.reply_delay(),
            generation_delay: config.generation_delay(),
        }
    }
}

/// Drives the scripted designer conversation.
pub struct ConversationEngine {
    log: MessageLog,
    blueprint: Blueprint,
    can_generate: bool,
    phase: DesignerPhase,
    timings: EngineTimings,
}

impl ConversationEngine {
    /// Start a conversation: empty blueprint, greeting already posted.
    pub fn new(timings: EngineTimings) -> Self {
        Self::with_blueprint(timings, Blueprint::default())
    }

    /// Start a conversation from a pre-filled blueprint (e.g. a template).
    pub fn with_blueprint(timings: EngineTimings, blueprint: Blueprint) -> Self {
        let mut log = MessageLog::new();
        log.append_text(MessageSender::Agent, script::GREETING);

        Self {
            log,
            blueprint,
            can_generate: false,
            phase: DesignerPhase::Composing,
            timings,
        }
    }

    /// Accept a user text turn.
    ///
    /// Whitespace-only input is ignored. The first accepted turn names the
    /// product, enables generation, and queues the acknowledgement reply.
    pub fn submit_user_text(&mut self, text: &str) -> Vec<Deferred> {
        if text.trim().is_empty() {
            debug!("Ignoring empty designer input");
            return Vec::new();
        }

        let id = self.log.append_text(MessageSender::User, text).id;

        if !self.blueprint.name_product(text) {
            debug!(message_id = %id, "Product already named; no scripted reply");
            return Vec::new();
        }

        self.can_generate = true;
        info!(message_id = %id, product = %text, "Product named");

        vec![Deferred {
            delay: self.timings.reply_delay,
            effect: DeferredEffect::AgentReply(script::product_acknowledgement(text)),
        }]
    }

    /// Accept an uploaded asset that has already been given a handle.
    pub fn submit_asset(&mut self, file_name: &str, handle: AssetHandle) -> Vec<Deferred> {
        let id = self.log.append_asset(file_name, handle).id;
        self.blueprint.add_asset(file_name);
        info!(message_id = %id, file_name = %file_name, "Asset attached");

        vec![Deferred {
            delay: self.timings.reply_delay,
            effect: DeferredEffect::AgentReply(script::asset_acknowledgement(file_name)),
        }]
    }

    /// Handle the "Generate Video" action.
    ///
    /// Ignored until a product is named and once generation has started.
    /// Fills blueprint gaps with AI defaults after the generation delay and
    /// moves the session into `Generating`.
    pub fn request_generation(&mut self) -> Vec<Deferred> {
        if !self.can_generate || self.phase == DesignerPhase::Generating {
            debug!(
                can_generate = self.can_generate,
                phase = %self.phase,
                "Generation request ignored"
            );
            return Vec::new();
        }

        self.phase = DesignerPhase::Generating;
        info!(title = %self.blueprint.title, "Generation requested");

        if !self.blueprint.needs_ai_defaults() {
            return Vec::new();
        }

        self.log
            .append_text(MessageSender::Agent, script::GENERATION_NOTICE);

        vec![Deferred {
            delay: self.timings.generation_delay,
            effect: DeferredEffect::ApplyAiDefaults(script::ai_defaults()),
        }]
    }

    /// Apply a deferred effect whose delay has elapsed.
    pub fn apply(&mut self, effect: DeferredEffect) -> AppliedEffect {
        match effect {
            DeferredEffect::AgentReply(text) => {
                let id = self.log.append_text(MessageSender::Agent, text).id;
                debug!(message_id = %id, "Agent reply delivered");
                AppliedEffect::AgentReplied(id)
            }
            DeferredEffect::ApplyAiDefaults(defaults) => {
                self.blueprint.apply_ai_defaults(&defaults);
                info!(scenes = self.blueprint.scenes.len(), "AI defaults applied");
                AppliedEffect::DefaultsApplied
            }
        }
    }

    /// Replace the blueprint title (the editable header field).
    pub fn rename(&mut self, title: &str) {
        self.blueprint.rename(title);
    }

    /// Discard the blueprint and start it over. The message log is kept.
    pub fn reset_blueprint(&mut self) {
        self.blueprint.reset();
        info!("Blueprint reset");
    }

    pub fn messages(&self) -> &[DesignerMessage] {
        self.log.messages()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn can_generate(&self) -> bool {
        self.can_generate
    }

    pub fn phase(&self) -> DesignerPhase {
        self.phase
    }

    pub fn timings(&self) -> EngineTimings {
        self.timings
    }
}
