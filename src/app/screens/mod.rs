//! TUI screen components
//!
//! One component per screen. Components keep only presentation state
//! (selection, scroll); all data comes from the store at render time, so
//! nothing is lost when the router switches screens.

pub mod group;
pub mod home;
pub mod learn;
pub mod money;
pub mod progress;

pub use group::GroupScreen;
pub use home::HomeScreen;
pub use learn::LearnScreen;
pub use money::MoneyScreen;
pub use progress::ProgressScreen;

/// Textual progress meter, e.g. "███████░░░" for 0.7 over width 10
pub(crate) fn meter(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled.min(width) {
        bar.push('█');
    }
    for _ in filled.min(width)..width {
        bar.push('░');
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0.0, 4), "░░░░");
        assert_eq!(meter(1.0, 4), "████");
        assert_eq!(meter(2.0, 4), "████");
        assert_eq!(meter(0.5, 4), "██░░");
    }
}
