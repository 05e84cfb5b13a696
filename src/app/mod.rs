//! TUI application module
//!
//! Contains the terminal user interface components, screen routing,
//! and the event dispatch loop.

pub mod app;
pub mod prompt;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use prompt::{AmountPrompt, PromptOutcome, PromptPurpose};
pub use screens::{GroupScreen, HomeScreen, LearnScreen, MoneyScreen, ProgressScreen};
pub use state::{NavigationAction, Router, Screen, Theme};
pub use tui::Tui;
