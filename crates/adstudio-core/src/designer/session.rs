//! Designer session: the single owner of one conversation.
//!
//! Wraps a `ConversationEngine` with an `AssetRegistry` and a
//! `ReplyScheduler`. User events mutate state immediately; deferred effects
//! come back over the scheduler's channel and are applied only when the
//! owner pulls them with `next_effect()`, `settle()`, or `apply_ready()`.
//! After `shutdown()` (or drop) no pending effect is ever applied.

use adstudio_types::config::StudioConfig;
use adstudio_types::designer::{AssetHandle, AssetUpload, Blueprint, DesignerMessage, DesignerPhase};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use super::assets::AssetRegistry;
use super::blueprint::BlueprintPanel;
use super::engine::{AppliedEffect, ConversationEngine, Deferred, DeferredEffect, EngineTimings};
use super::scheduler::ReplyScheduler;

/// One user's designer conversation.
///
/// Methods that schedule replies spawn tokio tasks and must be called from
/// within a tokio runtime.
pub struct DesignerSession {
    id: Uuid,
    engine: ConversationEngine,
    assets: AssetRegistry,
    scheduler: ReplyScheduler<DeferredEffect>,
    effects: mpsc::UnboundedReceiver<DeferredEffect>,
    /// Scheduled effects not yet applied.
    pending: usize,
    closed: bool,
}

impl DesignerSession {
    pub fn new(config: &StudioConfig) -> Self {
        Self::from_engine(ConversationEngine::new(EngineTimings::from(config)))
    }

    /// Start a session whose blueprint is pre-filled (e.g. from a template).
    pub fn with_blueprint(config: &StudioConfig, blueprint: Blueprint) -> Self {
        Self::from_engine(ConversationEngine::with_blueprint(
            EngineTimings::from(config),
            blueprint,
        ))
    }

    fn from_engine(engine: ConversationEngine) -> Self {
        let (scheduler, effects) = ReplyScheduler::new();
        let id = Uuid::now_v7();
        info!(session_id = %id, "Designer session started");
        Self {
            id,
            engine,
            assets: AssetRegistry::new(),
            scheduler,
            effects,
            pending: 0,
            closed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    // --- User events ---

    /// Submit a line typed into the chat box.
    pub fn submit_user_text(&mut self, text: &str) {
        if self.closed {
            return;
        }
        let deferred = self.engine.submit_user_text(text);
        self.schedule(deferred);
    }

    /// Attach a picked file and return its preview handle.
    pub fn submit_asset(&mut self, upload: AssetUpload) -> AssetHandle {
        let name = upload.name.clone();
        let handle = self.assets.register(upload);
        if !self.closed {
            let deferred = self.engine.submit_asset(&name, handle.clone());
            self.schedule(deferred);
        }
        handle
    }

    /// Press "Generate Video".
    pub fn request_generation(&mut self) {
        if self.closed {
            return;
        }
        let deferred = self.engine.request_generation();
        self.schedule(deferred);
    }

    pub fn rename(&mut self, title: &str) {
        self.engine.rename(title);
    }

    pub fn reset_blueprint(&mut self) {
        self.engine.reset_blueprint();
    }

    fn schedule(&mut self, deferred: Vec<Deferred>) {
        for d in deferred {
            let task = self.scheduler.schedule(d.delay, d.effect);
            debug!(
                session_id = %self.id,
                task_id = %task.id(),
                delay_ms = d.delay.as_millis() as u64,
                "Effect scheduled"
            );
            self.pending += 1;
        }
    }

    // --- Deferred effects ---

    /// Number of scheduled effects not yet applied.
    pub fn pending_effects(&self) -> usize {
        self.pending
    }

    /// Wait for the next scheduled effect and apply it.
    ///
    /// Returns `None` immediately when nothing is pending or the session is
    /// shut down.
    pub async fn next_effect(&mut self) -> Option<AppliedEffect> {
        if self.closed || self.pending == 0 {
            return None;
        }
        let effect = self.effects.recv().await?;
        Some(self.apply(effect))
    }

    /// Apply every pending effect, waiting out the delays.
    pub async fn settle(&mut self) -> Vec<AppliedEffect> {
        let mut applied = Vec::new();
        while let Some(effect) = self.next_effect().await {
            applied.push(effect);
        }
        applied
    }

    /// Apply whatever effects have already fired, without waiting.
    pub fn apply_ready(&mut self) -> Vec<AppliedEffect> {
        let mut applied = Vec::new();
        while !self.closed {
            match self.effects.try_recv() {
                Ok(effect) => applied.push(self.apply(effect)),
                Err(_) => break,
            }
        }
        applied
    }

    fn apply(&mut self, effect: DeferredEffect) -> AppliedEffect {
        self.pending = self.pending.saturating_sub(1);
        self.engine.apply(effect)
    }

    /// Tear the session down: cancel pending effects and revoke previews.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.scheduler.cancel_all();
        self.effects.close();
        let cancelled = std::mem::take(&mut self.pending);
        let revoked = self.assets.revoke_all();
        info!(session_id = %self.id, cancelled, revoked, "Designer session closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // --- Read access ---

    pub fn messages(&self) -> &[DesignerMessage] {
        self.engine.messages()
    }

    /// Messages appended after the first `seen`.
    pub fn messages_since(&self, seen: usize) -> &[DesignerMessage] {
        self.engine.log().since(seen)
    }

    pub fn blueprint(&self) -> &Blueprint {
        self.engine.blueprint()
    }

    pub fn panel(&self) -> BlueprintPanel {
        BlueprintPanel::new(self.engine.blueprint(), self.engine.can_generate())
    }

    pub fn can_generate(&self) -> bool {
        self.engine.can_generate()
    }

    pub fn phase(&self) -> DesignerPhase {
        self.engine.phase()
    }

    pub fn assets(&self) -> &AssetRegistry {
        &self.assets
    }
}

impl Drop for DesignerSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_types::designer::MessageSender;
    use std::time::Duration;

    use crate::designer::script;

    fn session() -> DesignerSession {
        DesignerSession::new(&StudioConfig::default())
    }

    fn upload(name: &str) -> AssetUpload {
        AssetUpload::new(name, format!("/tmp/{name}"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_product_reply_arrives_after_delay() {
        let mut session = session();
        session.submit_user_text("Cold Brew");
        assert_eq!(session.pending_effects(), 1);
        assert_eq!(session.messages().len(), 2);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(session.apply_ready().is_empty());
        assert_eq!(session.messages().len(), 2);

        let applied = session.next_effect().await;
        assert!(matches!(applied, Some(AppliedEffect::AgentReplied(_))));
        assert_eq!(session.pending_effects(), 0);

        let reply = session.messages().last().unwrap();
        assert_eq!(reply.sender, MessageSender::Agent);
        assert_eq!(reply.content, script::product_acknowledgement("Cold Brew"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_messages_since_follows_the_log() {
        let mut session = session();
        let seen = session.messages().len();
        session.submit_user_text("Cold Brew");
        assert_eq!(session.messages_since(seen).len(), 1);

        session.settle().await;
        let fresh = session.messages_since(seen);
        assert_eq!(fresh.len(), 2);
        assert_eq!(fresh[0].content, "Cold Brew");
        assert_eq!(fresh[1].sender, MessageSender::Agent);
        assert!(session.messages_since(session.messages().len() + 5).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_effect_returns_none_when_idle() {
        let mut session = session();
        assert!(session.next_effect().await.is_none());
        session.submit_user_text("   ");
        assert!(session.next_effect().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_turns_produce_independent_replies() {
        let mut session = session();
        session.submit_user_text("Cold Brew");
        session.submit_asset(upload("logo.png"));
        assert_eq!(session.pending_effects(), 2);

        let applied = session.settle().await;
        assert_eq!(applied.len(), 2);

        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents.len(), 5);
        assert_eq!(contents[1], "Cold Brew");
        assert_eq!(contents[2], "logo.png");
        // Both replies share a deadline, so their relative order is not fixed
        let product_reply = script::product_acknowledgement("Cold Brew");
        let asset_reply = script::asset_acknowledgement("logo.png");
        assert!(contents[3..].contains(&product_reply.as_str()));
        assert!(contents[3..].contains(&asset_reply.as_str()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_uploads_keep_order() {
        let mut session = session();
        for name in ["a.png", "b.png", "c.png"] {
            session.submit_asset(upload(name));
        }
        session.settle().await;

        assert_eq!(session.blueprint().assets, vec!["a.png", "b.png", "c.png"]);
        assert_eq!(session.assets().names(), vec!["a.png", "b.png", "c.png"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generation_defaults_land_after_delay() {
        let mut session = session();
        session.submit_user_text("Cold Brew");
        session.settle().await;

        session.request_generation();
        assert_eq!(session.phase(), DesignerPhase::Generating);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        session.apply_ready();
        assert!(session.blueprint().scenes.is_empty());

        let applied = session.next_effect().await;
        assert_eq!(applied, Some(AppliedEffect::DefaultsApplied));
        assert_eq!(session.blueprint().scenes.len(), 2);
        assert!(!session.blueprint().target_audience.is_empty());
        assert!(!session.blueprint().ad_tone.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_before_delay_drops_reply() {
        let mut session = session();
        let handle = session.submit_asset(upload("logo.png"));
        session.submit_user_text("Cold Brew");
        let before = session.messages().len();

        session.shutdown();
        tokio::time::sleep(Duration::from_millis(5000)).await;

        assert!(session.apply_ready().is_empty());
        assert!(session.next_effect().await.is_none());
        assert_eq!(session.messages().len(), before);
        assert_eq!(session.pending_effects(), 0);
        assert!(session.assets().resolve(&handle).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_after_shutdown_are_ignored() {
        let mut session = session();
        session.shutdown();

        session.submit_user_text("Cold Brew");
        session.request_generation();

        assert_eq!(session.messages().len(), 1);
        assert!(session.blueprint().product.is_empty());
        assert!(session.is_closed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_tracks_session_state() {
        let mut session = session();
        assert_eq!(session.panel().title, "Untitled Ad");

        session.submit_user_text("Cold Brew");
        let panel = session.panel();
        assert_eq!(panel.title, "Cold Brew Ad Campaign");
        assert!(panel.fields[1].hint.is_some());
    }
}
