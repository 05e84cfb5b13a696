//! View-state store
//!
//! Session-scoped, in-memory state behind a single façade. The rendering
//! layer only sees read-only projections; every mutation goes through the
//! operations here, runs to completion, and leaves the store consistent.

pub mod goals;
pub mod groups;
pub mod learning;
pub mod ledger;

pub use goals::{GoalBook, SavingsGoal};
pub use groups::{GroupActivity, GroupBoard};
pub use learning::{LearningModule, LearningProgress};
pub use ledger::{Activity, ActivityKind, Ledger};

use crate::clock::Clock;
use crate::Result;

/// One category of the derived financial-health breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthCategory {
    /// Category label shown on the progress screen
    pub title: &'static str,
    /// Score in [0, 100]
    pub score: u8,
}

/// The session store owning all five pieces of state
pub struct Store {
    ledger: Ledger,
    learning: LearningProgress,
    goals: GoalBook,
    groups: GroupBoard,
    clock: Box<dyn Clock>,
}

impl Store {
    /// Create a store seeded with the standard demo session data and the
    /// given opening balance.
    pub fn new(clock: Box<dyn Clock>, opening_balance: u64) -> Self {
        Self {
            ledger: Ledger::with_history(opening_balance, seed_activities()),
            learning: seed_learning(),
            goals: GoalBook::new(seed_goals()),
            groups: GroupBoard::new(seed_group_activities()),
            clock,
        }
    }

    // --- read-only projections ---

    /// Current balance in whole rupees
    pub fn balance(&self) -> u64 {
        self.ledger.balance()
    }

    /// Activity log, newest first
    pub fn activities(&self) -> &[Activity] {
        self.ledger.activities()
    }

    /// Learning state
    pub fn learning(&self) -> &LearningProgress {
        &self.learning
    }

    /// Savings goals
    pub fn goals(&self) -> &[SavingsGoal] {
        self.goals.goals()
    }

    /// Group activities
    pub fn group_activities(&self) -> &[GroupActivity] {
        self.groups.activities()
    }

    /// Number of group events currently marked attending
    pub fn attending_count(&self) -> usize {
        self.groups.attending_count()
    }

    // --- operations ---

    /// Add money to the balance ("Add" on the home and money screens)
    pub fn add_money(&mut self, amount: u64) -> Result<()> {
        let ts = self.clock.timestamp();
        self.ledger.credit(amount, "Added Money", ts)
    }

    /// Send money out of the balance ("Send" on the home and money screens)
    pub fn send_money(&mut self, amount: u64) -> Result<()> {
        let ts = self.clock.timestamp();
        self.ledger.debit(amount, "Sent Money", ts)
    }

    /// Contribute to a savings goal.
    ///
    /// Validates the index and the amount first, then debits the ledger and
    /// moves the goal counter. Either both the balance and the goal change
    /// by `amount`, or neither does.
    pub fn contribute_to_goal(&mut self, goal_index: usize, amount: u64) -> Result<()> {
        let description = format!("Contributed to {}", self.goals.get(goal_index)?.title);
        let ts = self.clock.timestamp();
        self.ledger.debit(amount, &description, ts)?;
        // Index was validated above, so the bookkeeping cannot fail and
        // the debit cannot be left dangling.
        self.goals.add_contribution(goal_index, amount)
    }

    /// Sit one lesson of a learning module; returns the new percentage
    pub fn start_lesson(&mut self, module_index: usize) -> Result<u8> {
        self.learning.advance(module_index)
    }

    /// Flip attendance on a group activity; returns the new flag
    pub fn toggle_attendance(&mut self, activity_index: usize) -> Result<bool> {
        self.groups.toggle_attendance(activity_index)
    }

    // --- derived projections for the progress screen ---

    /// Per-category financial-health scores derived from live state
    pub fn health_categories(&self) -> Vec<HealthCategory> {
        let credits = self
            .ledger
            .activities()
            .iter()
            .filter(|a| a.kind == ActivityKind::Credit)
            .count();
        let total = self.ledger.activities().len();
        let income_score = if total == 0 {
            0
        } else {
            (credits * 100 / total) as u8
        };

        vec![
            HealthCategory {
                title: "Savings Habit",
                score: ratio_to_score(self.goals.overall_fill_ratio()),
            },
            HealthCategory {
                title: "Learning Progress",
                score: ratio_to_score(self.learning.completion_ratio()),
            },
            HealthCategory {
                title: "Regular Income",
                score: income_score,
            },
            HealthCategory {
                title: "Goal Achievement",
                score: ratio_to_score(self.goals.mean_fill_ratio()),
            },
        ]
    }

    /// Headline financial-health score: rounded mean of the categories
    pub fn health_score(&self) -> u8 {
        let categories = self.health_categories();
        if categories.is_empty() {
            return 0;
        }
        let sum: u32 = categories.iter().map(|c| u32::from(c.score)).sum();
        ((sum + categories.len() as u32 / 2) / categories.len() as u32) as u8
    }
}

fn ratio_to_score(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

// Demo session seed, matching the prototype's opening state.

fn seed_activities() -> Vec<Activity> {
    vec![
        Activity {
            kind: ActivityKind::Credit,
            amount: 500,
            description: "Saved Money".to_string(),
            timestamp: "Today, 2:30 PM".to_string(),
        },
        Activity {
            kind: ActivityKind::Debit,
            amount: 200,
            description: "Sent to Group".to_string(),
            timestamp: "Today, 1:15 PM".to_string(),
        },
        Activity {
            kind: ActivityKind::Credit,
            amount: 1000,
            description: "Added Money".to_string(),
            timestamp: "Yesterday, 4:45 PM".to_string(),
        },
    ]
}

fn seed_learning() -> LearningProgress {
    LearningProgress::new(
        4,
        12,
        vec![
            LearningModule::new("Basic Banking", "Learn about savings accounts", 75),
            LearningModule::new("Smart Saving", "Tips for saving money", 50),
            LearningModule::new("Safe Investing", "Introduction to investments", 25),
        ],
    )
}

fn seed_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal::new("Emergency Fund", 25000, 15000),
        SavingsGoal::new("Children Education", 50000, 20000),
    ]
}

fn seed_group_activities() -> Vec<GroupActivity> {
    vec![
        GroupActivity::new("Weekly Meeting", "Sunday, 10:00 AM", "12/15", false),
        GroupActivity::new("Savings Collection", "Wednesday, 4:00 PM", "10/15", true),
        GroupActivity::new("Financial Training", "Saturday, 11:00 AM", "8/15", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn store() -> Store {
        Store::new(Box::new(FixedClock("Today, 3:00 PM".to_string())), 12500)
    }

    #[test]
    fn test_seeded_session() {
        let store = store();
        assert_eq!(store.balance(), 12500);
        assert_eq!(store.activities().len(), 3);
        assert_eq!(store.learning().modules().len(), 3);
        assert_eq!(store.goals().len(), 2);
        assert_eq!(store.group_activities().len(), 3);
        assert_eq!(store.attending_count(), 1);
    }

    #[test]
    fn test_add_money_uses_clock() {
        let mut store = store();
        store.add_money(500).unwrap();
        assert_eq!(store.balance(), 13000);

        let first = &store.activities()[0];
        assert_eq!(first.description, "Added Money");
        assert_eq!(first.timestamp, "Today, 3:00 PM");
    }

    #[test]
    fn test_contribution_is_atomic_on_success() {
        let mut store = store();
        store.contribute_to_goal(0, 1000).unwrap();

        assert_eq!(store.balance(), 11500);
        assert_eq!(store.goals()[0].current_amount, 16000);
        assert_eq!(store.activities()[0].description, "Contributed to Emergency Fund");
        assert_eq!(store.activities()[0].kind, ActivityKind::Debit);
    }

    #[test]
    fn test_contribution_is_atomic_on_failure() {
        let mut store = Store::new(Box::new(FixedClock("now".into())), 500);
        let err = store.contribute_to_goal(0, 1000).unwrap_err();

        assert!(matches!(err, crate::NidhiError::InsufficientFunds { .. }));
        assert_eq!(store.balance(), 500);
        assert_eq!(store.goals()[0].current_amount, 15000);
        assert_eq!(store.activities().len(), 3);
    }

    #[test]
    fn test_contribution_to_missing_goal_leaves_ledger_alone() {
        let mut store = store();
        let err = store.contribute_to_goal(9, 1000).unwrap_err();
        assert!(matches!(err, crate::NidhiError::IndexOutOfRange { .. }));
        assert_eq!(store.balance(), 12500);
        assert_eq!(store.activities().len(), 3);
    }

    #[test]
    fn test_health_categories_are_derived() {
        let store = store();
        let categories = store.health_categories();
        assert_eq!(categories.len(), 4);

        // Goals: 35000 of 75000 -> 47; learning: 4 of 12 -> 33;
        // income: 2 credits of 3 activities -> 66; achievement: mean(60, 40) -> 50.
        assert_eq!(categories[0].score, 47);
        assert_eq!(categories[1].score, 33);
        assert_eq!(categories[2].score, 66);
        assert_eq!(categories[3].score, 50);
        assert_eq!(store.health_score(), 49);
    }

    #[test]
    fn test_health_score_reacts_to_lessons() {
        let mut store = store();
        let before = store.health_categories()[1].score;
        store.start_lesson(0).unwrap();
        let after = store.health_categories()[1].score;
        assert!(after > before);
    }
}
