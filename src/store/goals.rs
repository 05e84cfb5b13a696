//! Goals model
//!
//! Named savings targets. The money movement for a contribution is owned by
//! the store so the ledger debit and the goal update stay atomic; this
//! module only does the per-goal bookkeeping.

use crate::{NidhiError, Result};

/// A named savings target with current and target amounts in whole rupees
#[derive(Debug, Clone)]
pub struct SavingsGoal {
    /// Goal title, e.g. "Emergency Fund"
    pub title: String,
    /// Amount to reach, always positive
    pub target_amount: u64,
    /// Amount saved so far
    pub current_amount: u64,
}

impl SavingsGoal {
    /// Create a goal
    pub fn new(title: &str, target_amount: u64, current_amount: u64) -> Self {
        Self {
            title: title.to_string(),
            target_amount,
            current_amount,
        }
    }

    /// Fill ratio in [0.0, 1.0], clamped when over-funded
    pub fn fill_ratio(&self) -> f64 {
        if self.target_amount == 0 {
            return 0.0;
        }
        (self.current_amount as f64 / self.target_amount as f64).min(1.0)
    }
}

/// The session's ordered list of savings goals
#[derive(Debug)]
pub struct GoalBook {
    goals: Vec<SavingsGoal>,
}

impl GoalBook {
    /// Create the goal book for a session
    pub fn new(goals: Vec<SavingsGoal>) -> Self {
        Self { goals }
    }

    /// Goals in display order
    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    /// Look up a goal, reporting an out-of-range index
    pub fn get(&self, index: usize) -> Result<&SavingsGoal> {
        self.goals.get(index).ok_or(NidhiError::IndexOutOfRange {
            collection: "goal",
            index,
            len: self.goals.len(),
        })
    }

    /// Add a contribution to a goal. The caller has already debited the
    /// ledger; this only moves the goal's counter.
    pub fn add_contribution(&mut self, index: usize, amount: u64) -> Result<()> {
        let len = self.goals.len();
        let goal = self.goals.get_mut(index).ok_or(NidhiError::IndexOutOfRange {
            collection: "goal",
            index,
            len,
        })?;
        goal.current_amount += amount;
        Ok(())
    }

    /// Mean fill ratio across all goals, in [0.0, 1.0]
    pub fn mean_fill_ratio(&self) -> f64 {
        if self.goals.is_empty() {
            return 0.0;
        }
        self.goals.iter().map(SavingsGoal::fill_ratio).sum::<f64>() / self.goals.len() as f64
    }

    /// Combined fill ratio: total saved over total targeted, in [0.0, 1.0]
    pub fn overall_fill_ratio(&self) -> f64 {
        let target: u64 = self.goals.iter().map(|g| g.target_amount).sum();
        if target == 0 {
            return 0.0;
        }
        let current: u64 = self.goals.iter().map(|g| g.current_amount).sum();
        (current as f64 / target as f64).min(1.0)
    }
}
