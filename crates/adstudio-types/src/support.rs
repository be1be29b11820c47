//! Help center types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A way to reach the support team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportChannel {
    pub name: &'static str,
    pub status: &'static str,
    pub description: &'static str,
}
