//! NIDHI - a financial-inclusion companion for the terminal
//!
//! A TUI application modelling a community-savings session: a rupee ledger
//! with an activity log, financial-literacy learning modules, savings goals
//! and group activities, spread over five screens.

use std::fmt;

// Public re-exports
pub mod app;
pub mod clock;
pub mod config;
pub mod store;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum NidhiError {
    /// A debit or contribution larger than the current balance
    InsufficientFunds {
        /// Amount the operation asked for
        requested: u64,
        /// Balance available at the time
        available: u64,
    },
    /// A module, goal or activity index outside the collection
    IndexOutOfRange {
        /// Which collection was indexed
        collection: &'static str,
        /// The offending index
        index: usize,
        /// Length of the collection
        len: usize,
    },
    /// A zero or unparseable amount at the input boundary
    InvalidAmount(String),
    /// An unknown screen name at a string boundary (config, shortcuts)
    InvalidScreen(String),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// I/O operation failed
    IoError(std::io::Error),
}

impl fmt::Display for NidhiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NidhiError::InsufficientFunds {
                requested,
                available,
            } => write!(
                f,
                "Insufficient funds: requested {} but only {} available",
                requested, available
            ),
            NidhiError::IndexOutOfRange {
                collection,
                index,
                len,
            } => write!(
                f,
                "Index {} out of range for {} (len {})",
                index, collection, len
            ),
            NidhiError::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            NidhiError::InvalidScreen(name) => write!(f, "Unknown screen: {}", name),
            NidhiError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            NidhiError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            NidhiError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for NidhiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NidhiError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NidhiError {
    fn from(err: std::io::Error) -> Self {
        NidhiError::IoError(err)
    }
}

impl From<toml::de::Error> for NidhiError {
    fn from(err: toml::de::Error) -> Self {
        NidhiError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for NidhiError {
    fn from(err: toml::ser::Error) -> Self {
        NidhiError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for nidhi operations
pub type Result<T> = std::result::Result<T, NidhiError>;

/// Error handling utilities
pub mod error {
    use super::NidhiError;

    /// Whether the UI can keep running after this error. Everything the
    /// store reports is recoverable; only terminal failures are not.
    pub fn is_recoverable(error: &NidhiError) -> bool {
        !matches!(error, NidhiError::TuiError(_) | NidhiError::IoError(_))
    }

    /// Convert an error to a short message suitable for the status notice
    pub fn user_friendly_message(error: &NidhiError) -> String {
        match error {
            NidhiError::InsufficientFunds { available, .. } => {
                format!(
                    "Not enough balance (₹{} available). Try a smaller amount.",
                    available
                )
            }
            NidhiError::InvalidAmount(_) => {
                "Please enter an amount greater than zero.".to_string()
            }
            NidhiError::IndexOutOfRange { collection, .. } => {
                format!("That {} entry no longer exists.", collection)
            }
            NidhiError::InvalidScreen(name) => format!("No such screen: {}", name),
            NidhiError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "nidhi";
pub const CONFIG_FILE: &str = "nidhi.toml";
pub const LOG_FILE: &str = "nidhi.log";
/// Progress gained by one lesson sitting, in percent
pub const LESSON_STEP: u8 = 25;
