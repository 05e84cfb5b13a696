//! Ledger model
//!
//! Owns the rupee balance and the activity log. Activities are immutable
//! once recorded and kept newest-first; the log is unbounded for the
//! lifetime of the session.

use crate::{NidhiError, Result};

/// Direction of a recorded activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Money added to the balance
    Credit,
    /// Money taken from the balance
    Debit,
}

/// A single recorded credit or debit event
#[derive(Debug, Clone)]
pub struct Activity {
    /// Credit or debit
    pub kind: ActivityKind,
    /// Amount moved, always positive, in whole rupees
    pub amount: u64,
    /// Short human-readable description, e.g. "Added Money"
    pub description: String,
    /// Timestamp label supplied by the clock collaborator
    pub timestamp: String,
}

impl Activity {
    /// Signed display amount, e.g. "+₹500" or "-₹200"
    pub fn signed_amount(&self) -> String {
        let sign = match self.kind {
            ActivityKind::Credit => '+',
            ActivityKind::Debit => '-',
        };
        format!("{}₹{}", sign, crate::util::format::group_rupees(self.amount))
    }
}

/// Balance plus ordered activity history
#[derive(Debug)]
pub struct Ledger {
    balance: u64,
    activities: Vec<Activity>,
}

impl Ledger {
    /// Create a ledger with an opening balance and no history
    pub fn new(opening_balance: u64) -> Self {
        Self {
            balance: opening_balance,
            activities: Vec::new(),
        }
    }

    /// Create a ledger with an opening balance and pre-recorded history
    /// (newest first, as it will be displayed)
    pub fn with_history(opening_balance: u64, activities: Vec<Activity>) -> Self {
        Self {
            balance: opening_balance,
            activities,
        }
    }

    /// Current balance in whole rupees
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Activity log, newest first
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Add money to the balance and record a credit activity.
    ///
    /// The amount is caller-supplied and validated here: zero is rejected.
    pub fn credit(&mut self, amount: u64, description: &str, timestamp: String) -> Result<()> {
        validate_amount(amount)?;
        self.balance += amount;
        self.record(ActivityKind::Credit, amount, description, timestamp);
        Ok(())
    }

    /// Take money from the balance and record a debit activity.
    ///
    /// Fails with `InsufficientFunds` when the balance cannot cover the
    /// amount; the balance and the log are left untouched in that case.
    pub fn debit(&mut self, amount: u64, description: &str, timestamp: String) -> Result<()> {
        validate_amount(amount)?;
        if self.balance < amount {
            return Err(NidhiError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.record(ActivityKind::Debit, amount, description, timestamp);
        Ok(())
    }

    fn record(&mut self, kind: ActivityKind, amount: u64, description: &str, timestamp: String) {
        self.activities.insert(
            0,
            Activity {
                kind,
                amount,
                description: description.to_string(),
                timestamp,
            },
        );
    }
}

fn validate_amount(amount: u64) -> Result<()> {
    if amount == 0 {
        return Err(NidhiError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> String {
        "Today, 2:30 PM".to_string()
    }

    #[test]
    fn test_credit_updates_balance_and_log() {
        let mut ledger = Ledger::new(12500);
        ledger.credit(500, "Added Money", ts()).unwrap();

        assert_eq!(ledger.balance(), 13000);
        let first = &ledger.activities()[0];
        assert_eq!(first.kind, ActivityKind::Credit);
        assert_eq!(first.amount, 500);
        assert_eq!(first.description, "Added Money");
    }

    #[test]
    fn test_debit_updates_balance() {
        let mut ledger = Ledger::new(12500);
        ledger.debit(200, "Sent Money", ts()).unwrap();

        assert_eq!(ledger.balance(), 12300);
        assert_eq!(ledger.activities()[0].kind, ActivityKind::Debit);
    }

    #[test]
    fn test_debit_insufficient_funds_changes_nothing() {
        let mut ledger = Ledger::new(100);
        let err = ledger.debit(200, "Sent Money", ts()).unwrap_err();

        assert!(matches!(
            err,
            crate::NidhiError::InsufficientFunds {
                requested: 200,
                available: 100
            }
        ));
        assert_eq!(ledger.balance(), 100);
        assert!(ledger.activities().is_empty());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut ledger = Ledger::new(100);
        assert!(ledger.credit(0, "Added Money", ts()).is_err());
        assert!(ledger.debit(0, "Sent Money", ts()).is_err());
        assert_eq!(ledger.balance(), 100);
        assert!(ledger.activities().is_empty());
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut ledger = Ledger::new(1000);
        ledger.credit(10, "first", ts()).unwrap();
        ledger.credit(20, "second", ts()).unwrap();
        ledger.debit(5, "third", ts()).unwrap();

        let descs: Vec<&str> = ledger
            .activities()
            .iter()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(descs, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_signed_amount_display() {
        let mut ledger = Ledger::new(1000);
        ledger.credit(500, "Added Money", ts()).unwrap();
        ledger.debit(200, "Sent Money", ts()).unwrap();

        assert_eq!(ledger.activities()[1].signed_amount(), "+₹500");
        assert_eq!(ledger.activities()[0].signed_amount(), "-₹200");
    }
}
