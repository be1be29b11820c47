//! Notification center state.
//!
//! Holds the bell-menu list: unread badge count, mark-as-read, clear, and
//! the relative timestamps shown next to each entry.

use adstudio_types::notification::{Notification, NotificationKind};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Add a fresh unread notification at the top of the list.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, link: Option<String>) {
        let notification = Notification {
            id: Uuid::now_v7().to_string(),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
            link,
        };
        debug!(kind = %notification.kind, "Notification added");
        self.notifications.insert(0, notification);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Badge count on the bell icon.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns whether it was found.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn clear_all(&mut self) {
        self.notifications.clear();
    }
}

/// Render `timestamp` relative to `now`: "5m ago", "3h ago", "2d ago".
///
/// Future timestamps render as "0m ago".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).max(chrono::Duration::zero());
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();

    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", diff.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Video,
            message: format!("notification {id}"),
            timestamp: Utc::now(),
            read,
            link: None,
        }
    }

    fn center() -> NotificationCenter {
        NotificationCenter::new(vec![
            notification("1", false),
            notification("2", false),
            notification("3", true),
        ])
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(center().unread_count(), 2);
        assert_eq!(NotificationCenter::default().unread_count(), 0);
    }

    #[test]
    fn test_mark_read_single() {
        let mut center = center();
        assert!(center.mark_read("1"));
        assert_eq!(center.unread_count(), 1);
        assert!(!center.mark_read("missing"));
    }

    #[test]
    fn test_mark_all_read_and_clear() {
        let mut center = center();
        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.notifications().len(), 3);

        center.clear_all();
        assert!(center.notifications().is_empty());
    }

    #[test]
    fn test_push_goes_on_top_unread() {
        let mut center = center();
        center.push(NotificationKind::Alert, "Your credits are low", Some("/billing".to_string()));
        assert_eq!(center.notifications()[0].message, "Your credits are low");
        assert_eq!(center.unread_count(), 3);
    }

    #[test]
    fn test_format_relative_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::minutes(2), now), "2m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative(now - Duration::hours(1), now), "1h ago");
        assert_eq!(format_relative(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_relative(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "1d ago");
        assert_eq!(format_relative(now + Duration::minutes(5), now), "0m ago");
    }
}
