//! Credit ledger for the billing screen and the sidebar counter.
//!
//! Purchases are mocked: picking a package records a completed transaction
//! and adds its credits. Generations spend a fixed number of credits.

use adstudio_types::billing::{CreditPackage, Transaction, TransactionStatus};
use adstudio_types::config::StudioConfig;
use adstudio_types::error::BillingError;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

/// The packages offered on the billing screen.
pub fn credit_packages() -> Vec<CreditPackage> {
    vec![
        CreditPackage {
            credits: 50,
            price_usd: 25,
            label: None,
        },
        CreditPackage {
            credits: 150,
            price_usd: 60,
            label: Some("Best Value".to_string()),
        },
        CreditPackage {
            credits: 500,
            price_usd: 150,
            label: None,
        },
    ]
}

/// Credit balance plus transaction history (newest first).
#[derive(Debug)]
pub struct CreditLedger {
    balance: u32,
    packages: Vec<CreditPackage>,
    history: Vec<Transaction>,
    generation_cost: u32,
    low_threshold: u32,
}

impl CreditLedger {
    pub fn new(config: &StudioConfig, history: Vec<Transaction>) -> Self {
        Self {
            balance: config.starting_credits,
            packages: credit_packages(),
            history,
            generation_cost: config.generation_cost,
            low_threshold: config.low_credit_threshold,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn packages(&self) -> &[CreditPackage] {
        &self.packages
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn generation_cost(&self) -> u32 {
        self.generation_cost
    }

    /// Whether the balance warrants a low-credit alert.
    pub fn is_low(&self) -> bool {
        self.balance <= self.low_threshold
    }

    /// Buy the package with exactly `credits` credits.
    pub fn purchase(&mut self, credits: u32) -> Result<&Transaction, BillingError> {
        let package = self
            .packages
            .iter()
            .find(|p| p.credits == credits)
            .cloned()
            .ok_or(BillingError::UnknownPackage(credits))?;

        self.balance = self
            .balance
            .checked_add(package.credits)
            .ok_or(BillingError::BalanceOverflow {
                balance: self.balance,
                adding: package.credits,
            })?;
        info!(credits = package.credits, price_usd = package.price_usd, balance = self.balance, "Credits purchased");

        Ok(self.record(
            format!("Credit Purchase - {} Credits", package.credits),
            package.price_usd,
            i64::from(package.credits),
        ))
    }

    /// Spend credits on generating the video titled `title`.
    pub fn charge_generation(&mut self, title: &str) -> Result<&Transaction, BillingError> {
        let cost = self.generation_cost;
        if self.balance < cost {
            warn!(balance = self.balance, cost, "Not enough credits to generate");
            return Err(BillingError::InsufficientCredits {
                needed: cost,
                available: self.balance,
            });
        }

        self.balance -= cost;
        info!(title = %title, cost, balance = self.balance, "Generation charged");

        Ok(self.record(format!("Project Generation - {title}"), 0, -i64::from(cost)))
    }

    fn record(&mut self, description: String, amount_usd: u32, credits: i64) -> &Transaction {
        self.history.insert(
            0,
            Transaction {
                id: Uuid::now_v7().to_string(),
                date: Utc::now(),
                description,
                amount_usd,
                credits,
                status: TransactionStatus::Completed,
            },
        );
        &self.history[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> CreditLedger {
        CreditLedger::new(&StudioConfig::default(), Vec::new())
    }

    #[test]
    fn test_starting_balance_from_config() {
        let ledger = ledger();
        assert_eq!(ledger.balance(), 145);
        assert_eq!(ledger.packages().len(), 3);
        assert_eq!(ledger.packages()[1].label.as_deref(), Some("Best Value"));
        assert!(!ledger.is_low());
    }

    #[test]
    fn test_purchase_adds_credits_and_history() {
        let mut ledger = ledger();
        let tx = ledger.purchase(150).unwrap();
        assert_eq!(tx.description, "Credit Purchase - 150 Credits");
        assert_eq!(tx.amount_usd, 60);
        assert_eq!(tx.credits, 150);

        assert_eq!(ledger.balance(), 295);
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn test_purchase_unknown_package() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.purchase(75),
            Err(BillingError::UnknownPackage(75))
        ));
        assert_eq!(ledger.balance(), 145);
    }

    #[test]
    fn test_purchase_overflow_leaves_balance() {
        let config = StudioConfig {
            starting_credits: u32::MAX - 10,
            ..StudioConfig::default()
        };
        let mut ledger = CreditLedger::new(&config, Vec::new());

        let err = ledger.purchase(50).unwrap_err();
        assert!(matches!(err, BillingError::BalanceOverflow { adding: 50, .. }));
        assert_eq!(ledger.balance(), u32::MAX - 10);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_charge_generation_spends_cost() {
        let mut ledger = ledger();
        let tx = ledger.charge_generation("Cold Brew Ad Campaign").unwrap();
        assert_eq!(tx.description, "Project Generation - Cold Brew Ad Campaign");
        assert_eq!(tx.credits, -5);
        assert_eq!(ledger.balance(), 140);
    }

    #[test]
    fn test_charge_generation_insufficient() {
        let config = StudioConfig {
            starting_credits: 3,
            ..StudioConfig::default()
        };
        let mut ledger = CreditLedger::new(&config, Vec::new());
        assert!(ledger.is_low());

        let err = ledger.charge_generation("Anything").unwrap_err();
        assert!(matches!(
            err,
            BillingError::InsufficientCredits {
                needed: 5,
                available: 3
            }
        ));
        assert_eq!(ledger.balance(), 3);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut ledger = ledger();
        ledger.purchase(50).unwrap();
        ledger.charge_generation("Spring Coffee Launch").unwrap();
        assert_eq!(
            ledger.history()[0].description,
            "Project Generation - Spring Coffee Launch"
        );
    }
}
