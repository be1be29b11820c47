//! Help center: searchable FAQ accordion and contact channels.

use adstudio_types::support::{Faq, SupportChannel};
use tracing::debug;

use crate::catalog::matches_search;

pub const SUPPORT_CHANNELS: [SupportChannel; 2] = [
    SupportChannel {
        name: "Live Chat Support",
        status: "Agents Online",
        description: "Get immediate assistance from our support team. \
                      Available Monday to Friday, 9 AM - 6 PM UTC.",
    },
    SupportChannel {
        name: "Email Support",
        status: "Response within 24 hours",
        description: "Send us a detailed message and we'll get back to you \
                      with a solution within one business day.",
    },
];

pub const RESOURCES: [&str; 3] = ["User Guides", "Video Tutorials", "Community Forum"];

/// FAQ list where at most one answer is expanded at a time.
#[derive(Debug)]
pub struct SupportCenter {
    faqs: Vec<Faq>,
    expanded: Option<usize>,
}

impl SupportCenter {
    pub fn new(faqs: Vec<Faq>) -> Self {
        Self {
            faqs,
            expanded: None,
        }
    }

    /// FAQs whose question or answer contains `query`, with their indices.
    pub fn search(&self, query: &str) -> Vec<(usize, &Faq)> {
        self.faqs
            .iter()
            .enumerate()
            .filter(|(_, faq)| {
                matches_search(&faq.question, query) || matches_search(&faq.answer, query)
            })
            .collect()
    }

    /// Open the FAQ at `index`, or close it if it is already open.
    /// Returns whether it is open afterwards; out-of-range indices do nothing.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.faqs.len() {
            return false;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, expanded = ?self.expanded, "FAQ toggled");
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn faq_count(&self) -> usize {
        self.faqs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> SupportCenter {
        SupportCenter::new(vec![
            Faq::new("How do credits work?", "Each generation costs credits."),
            Faq::new("What video formats are supported?", "MP4, MOV, and AVI."),
        ])
    }

    #[test]
    fn test_search_matches_question_and_answer() {
        let center = center();
        assert_eq!(center.search("").len(), 2);
        assert_eq!(center.search("CREDITS")[0].0, 0);

        let by_answer = center.search("mov");
        assert_eq!(by_answer.len(), 1);
        assert_eq!(by_answer[0].0, 1);

        assert!(center.search("refund").is_empty());
    }

    #[test]
    fn test_toggle_is_an_accordion() {
        let mut center = center();
        assert_eq!(center.expanded(), None);

        assert!(center.toggle(0));
        assert!(center.toggle(1));
        assert_eq!(center.expanded(), Some(1));

        assert!(!center.toggle(1));
        assert_eq!(center.expanded(), None);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut center = center();
        center.toggle(0);
        assert!(!center.toggle(7));
        assert_eq!(center.expanded(), Some(0));
        assert_eq!(center.faq_count(), 2);
    }
}
