//! Progress model
//!
//! Learning modules with independent completion percentages and a session
//! lesson counter. A module moves in 25% steps and the counter increments
//! exactly once, on the step that reaches 100%.

use crate::{NidhiError, Result, LESSON_STEP};

/// A unit of educational content with its own completion progress
#[derive(Debug, Clone)]
pub struct LearningModule {
    /// Module title, e.g. "Basic Banking"
    pub title: String,
    /// One-line description shown under the title
    pub description: String,
    /// Completion percentage in [0, 100]
    pub progress_percent: u8,
}

impl LearningModule {
    /// Create a module with an initial progress percentage
    pub fn new(title: &str, description: &str, progress_percent: u8) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            progress_percent: progress_percent.min(100),
        }
    }

    /// Whether the module has been fully completed
    pub fn is_complete(&self) -> bool {
        self.progress_percent >= 100
    }
}

/// Lesson counter plus the ordered module list
#[derive(Debug)]
pub struct LearningProgress {
    completed_lessons: u32,
    total_lessons: u32,
    modules: Vec<LearningModule>,
}

impl LearningProgress {
    /// Create the learning state for a session
    pub fn new(completed_lessons: u32, total_lessons: u32, modules: Vec<LearningModule>) -> Self {
        Self {
            completed_lessons,
            total_lessons,
            modules,
        }
    }

    /// Lessons completed so far in this session
    pub fn completed_lessons(&self) -> u32 {
        self.completed_lessons
    }

    /// Total lessons on offer (constant for the session)
    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    /// Modules in display order
    pub fn modules(&self) -> &[LearningModule] {
        &self.modules
    }

    /// Overall completion ratio in [0.0, 1.0] for the progress gauge
    pub fn completion_ratio(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        (f64::from(self.completed_lessons) / f64::from(self.total_lessons)).min(1.0)
    }

    /// Advance a module by one lesson step and return its new percentage.
    ///
    /// Progress is capped at 100 and never decreases; calling this on a
    /// finished module is a no-op. The lesson counter moves by exactly one
    /// on the call that lands on 100.
    pub fn advance(&mut self, module_index: usize) -> Result<u8> {
        let len = self.modules.len();
        let module = self
            .modules
            .get_mut(module_index)
            .ok_or(NidhiError::IndexOutOfRange {
                collection: "module",
                index: module_index,
                len,
            })?;

        if module.progress_percent < 100 {
            module.progress_percent = module.progress_percent.saturating_add(LESSON_STEP).min(100);
            if module.progress_percent == 100 {
                self.completed_lessons += 1;
            }
        }
        Ok(self.modules[module_index].progress_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LearningProgress {
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

    #[test]
    fn test_advance_steps_by_25() {
        let mut learning = sample();
        assert_eq!(learning.advance(1).unwrap(), 75);
        assert_eq!(learning.modules()[1].progress_percent, 75);
        assert_eq!(learning.completed_lessons(), 4);
    }

    #[test]
    fn test_completion_counts_exactly_once() {
        let mut learning = sample();

        // 75 -> 100 completes the module and bumps the counter
        assert_eq!(learning.advance(0).unwrap(), 100);
        assert_eq!(learning.completed_lessons(), 5);
        assert!(learning.modules()[0].is_complete());

        // Further calls are no-ops: progress stays capped, counter untouched
        for _ in 0..5 {
            assert_eq!(learning.advance(0).unwrap(), 100);
        }
        assert_eq!(learning.completed_lessons(), 5);
    }

    #[test]
    fn test_invalid_index_is_reported() {
        let mut learning = sample();
        let err = learning.advance(7).unwrap_err();
        assert!(matches!(
            err,
            crate::NidhiError::IndexOutOfRange {
                collection: "module",
                index: 7,
                len: 3
            }
        ));
        assert_eq!(learning.completed_lessons(), 4);
    }

    #[test]
    fn test_completion_ratio() {
        let learning = sample();
        assert!((learning.completion_ratio() - 4.0 / 12.0).abs() < 1e-9);

        let empty = LearningProgress::new(0, 0, Vec::new());
        assert_eq!(empty.completion_ratio(), 0.0);
    }

    #[test]
    fn test_progress_never_exceeds_100() {
        let mut learning = LearningProgress::new(0, 4, vec![LearningModule::new("M", "d", 0)]);
        for _ in 0..10 {
            learning.advance(0).unwrap();
        }
        assert_eq!(learning.modules()[0].progress_percent, 100);
        assert_eq!(learning.completed_lessons(), 1);
    }
}
