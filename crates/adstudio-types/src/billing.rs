//! Billing and credit types.
//!
//! Credits are the unit spent on video generation. Purchases are mocked:
//! there is no payment processing behind a `Transaction`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// A purchasable bundle of credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditPackage {
    pub credits: u32,
    pub price_usd: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One line of the billing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    /// Amount charged in whole US dollars (0 for credit spends).
    pub amount_usd: u32,
    /// Signed credit delta: positive for purchases, negative for spends.
    pub credits: i64,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Credits column as rendered in the history table ("+150", "-5").
    pub fn credits_display(&self) -> String {
        if self.credits > 0 {
            format!("+{}", self.credits)
        } else {
            self.credits.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(credits: i64) -> Transaction {
        Transaction {
            id: "1".to_string(),
            date: Utc::now(),
            description: "test".to_string(),
            amount_usd: 0,
            credits,
            status: TransactionStatus::Completed,
        }
    }

    #[test]
    fn test_credits_display_signs() {
        assert_eq!(tx(150).credits_display(), "+150");
        assert_eq!(tx(-5).credits_display(), "-5");
        assert_eq!(tx(0).credits_display(), "0");
    }
}
