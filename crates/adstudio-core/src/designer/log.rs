//! Append-only message log for a designer conversation.

use adstudio_types::designer::{AssetHandle, DesignerMessage, MessageId, MessageKind, MessageSender};
use chrono::{DateTime, Utc};

/// Ordered, append-only list of designer messages.
///
/// Ids are derived from the creation time in milliseconds and bumped past
/// the previous id when the clock has not moved, so they are unique and
/// strictly increasing in insertion order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<DesignerMessage>,
    last_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text message and return a reference to it.
    pub fn append_text(&mut self, sender: MessageSender, content: impl Into<String>) -> &DesignerMessage {
        self.push(sender, content.into(), MessageKind::Text, None)
    }

    /// Append a user asset message carrying the file name and its handle.
    pub fn append_asset(&mut self, file_name: impl Into<String>, handle: AssetHandle) -> &DesignerMessage {
        self.push(MessageSender::User, file_name.into(), MessageKind::Asset, Some(handle))
    }

    fn push(
        &mut self,
        sender: MessageSender,
        content: String,
        kind: MessageKind,
        asset_reference: Option<AssetHandle>,
    ) -> &DesignerMessage {
        let created_at = Utc::now();
        let id = self.next_id(created_at);
        self.messages.push(DesignerMessage {
            id,
            sender,
            content,
            kind,
            asset_reference,
            created_at,
        });
        &self.messages[self.messages.len() - 1]
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> MessageId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last_id + 1);
        self.last_id = id;
        MessageId(id)
    }

    pub fn messages(&self) -> &[DesignerMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesignerMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&DesignerMessage> {
        self.messages.last()
    }

    /// Messages appended after the first `seen` entries.
    pub fn since(&self, seen: usize) -> &[DesignerMessage] {
        &self.messages[seen.min(self.messages.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.since(3).is_empty());
    }

    #[test]
    fn test_insertion_order_preserved_for_any_length() {
        for n in 0..50 {
            let mut log = MessageLog::new();
            for i in 0..n {
                let sender = if i % 2 == 0 {
                    MessageSender::User
                } else {
                    MessageSender::Agent
                };
                log.append_text(sender, format!("message {i}"));
            }

            assert_eq!(log.len(), n);
            for (i, msg) in log.iter().enumerate() {
                assert_eq!(msg.content, format!("message {i}"));
            }
        }
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut log = MessageLog::new();
        for i in 0..100 {
            log.append_text(MessageSender::User, i.to_string());
        }

        let ids: Vec<MessageId> = log.iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_append_asset_sets_kind_and_reference() {
        let mut log = MessageLog::new();
        let handle = AssetHandle("blob:adstudio/1".to_string());

        let msg = log.append_asset("logo.png", handle.clone());

        assert_eq!(msg.sender, MessageSender::User);
        assert_eq!(msg.kind, MessageKind::Asset);
        assert_eq!(msg.content, "logo.png");
        assert_eq!(msg.asset_reference, Some(handle));
    }

    #[test]
    fn test_since_returns_tail() {
        let mut log = MessageLog::new();
        log.append_text(MessageSender::Agent, "a");
        log.append_text(MessageSender::User, "b");
        log.append_text(MessageSender::Agent, "c");

        let tail: Vec<&str> = log.since(1).iter().map(|m| m.content.as_str()).collect();
        assert_eq!(tail, vec!["b", "c"]);
    }
}
