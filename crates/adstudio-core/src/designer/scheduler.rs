//! Cancellable delayed delivery for scripted agent effects.
//!
//! Each scheduled effect runs as a tokio task that sleeps for its delay and
//! then sends the effect back to the owning session over an unbounded
//! channel. Every task watches a child of the scheduler's root
//! `CancellationToken`, so one `cancel_all()` (or dropping the scheduler)
//! stops every pending delivery. The owner applies effects on its own task;
//! tasks never touch session state.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use uuid::Uuid;

/// Handle to one pending delivery.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    id: Uuid,
    token: CancellationToken,
}

impl ScheduledTask {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Stop this delivery if it has not fired yet.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Schedules effects of type `E` for delayed delivery.
///
/// Must be used from within a tokio runtime.
pub struct ReplyScheduler<E> {
    tx: mpsc::UnboundedSender<E>,
    root: CancellationToken,
}

impl<E: Send + 'static> ReplyScheduler<E> {
    /// Create a scheduler and the receiver its deliveries arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<E>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                root: CancellationToken::new(),
            },
            rx,
        )
    }

    /// Deliver `effect` after `delay` unless cancelled first.
    ///
    /// Scheduling after `cancel_all()` returns an already-cancelled task.
    pub fn schedule(&self, delay: Duration, effect: E) -> ScheduledTask {
        let task = ScheduledTask {
            id: Uuid::now_v7(),
            token: self.root.child_token(),
        };

        let token = task.token.clone();
        let tx = self.tx.clone();
        let task_id = task.id;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(task_id = %task_id, "Scheduled effect cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if tx.send(effect).is_err() {
                        debug!(task_id = %task_id, "Session gone before scheduled effect fired");
                    }
                }
            }
        });

        task
    }

    /// Cancel every pending and future delivery.
    pub fn cancel_all(&self) {
        self.root.cancel();
    }
}

impl<E> Drop for ReplyScheduler<E> {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
