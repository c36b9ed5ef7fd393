//! Error types for the poker ledger
//!
//! This module defines the errors reported by the settlement engine and by
//! the file-backed front end around it. Errors are designed to be descriptive
//! enough to show to the person who typed the round in.
//!
//! # Error Categories
//!
//! - **Settlement Errors**: Missing fields, duplicate players, imbalanced rounds
//!   (user-correctable) and internal invariant violations (engine defects)
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid amounts or dates

use super::round::NetAmount;
use std::fmt;
use thiserror::Error;

/// A required field of a round row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundField {
    Name,
    BuyIn,
    CashOut,
}

impl fmt::Display for RoundField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundField::Name => "player name",
            RoundField::BuyIn => "buy-in",
            RoundField::CashOut => "cash-out",
        };
        f.write_str(name)
    }
}

/// Direction of a failed conservation check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImbalanceKind {
    /// More was cashed out than bought in
    Excess,
    /// Less was cashed out than bought in
    Deficit,
}

impl fmt::Display for ImbalanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImbalanceKind::Excess => f.write_str("excess"),
            ImbalanceKind::Deficit => f.write_str("deficit"),
        }
    }
}

/// Errors produced while settling a game round
///
/// Every variant except `InternalInvariantViolation` describes bad input the
/// user can correct. No variant is ever retried by the engine, and no
/// partial settlement is emitted alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// A row is missing its name, buy-in or cash-out
    #[error("Row {row} is missing its {field}")]
    MissingField {
        /// 1-based row number within the round
        row: usize,
        /// The field that was left blank
        field: RoundField,
    },

    /// The same player appears twice in one round
    #[error("Player '{name}' appears more than once in the round")]
    DuplicatePlayer {
        /// The repeated name (trimmed)
        name: String,
    },

    /// Total buy-ins differ from total cash-outs
    ///
    /// `amount` is the exact magnitude of the difference, so the caller can
    /// show the user how far off the entered amounts are.
    #[error("Round is imbalanced: {kind} of {amount}")]
    ImbalancedRound {
        /// Whether too much or too little was cashed out
        kind: ImbalanceKind,
        /// Absolute value of the net sum
        amount: NetAmount,
    },

    /// Greedy matching ended with one side still holding a balance
    ///
    /// Cannot happen once the conservation check has passed; seeing it means
    /// the engine itself is broken.
    #[error(
        "Internal invariant violated: settlement ended with {gainers_left} gainer(s) and {losers_left} loser(s) unmatched"
    )]
    InternalInvariantViolation {
        /// Gainers still owed money
        gainers_left: usize,
        /// Losers still owing money
        losers_left: usize,
    },
}

impl SettlementError {
    /// Create a MissingField error
    pub fn missing_field(row: usize, field: RoundField) -> Self {
        SettlementError::MissingField { row, field }
    }

    /// Create a DuplicatePlayer error
    pub fn duplicate_player(name: &str) -> Self {
        SettlementError::DuplicatePlayer {
            name: name.to_string(),
        }
    }

    /// Create an ImbalancedRound error from the non-zero net sum of a round
    ///
    /// A negative sum means more money left the table than came in.
    pub fn imbalanced(net_sum: NetAmount) -> Self {
        let kind = if net_sum < 0 {
            ImbalanceKind::Excess
        } else {
            ImbalanceKind::Deficit
        };
        SettlementError::ImbalancedRound {
            kind,
            amount: net_sum.abs(),
        }
    }

    /// Whether the error is caused by the input rather than the engine
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SettlementError::InternalInvariantViolation { .. })
    }
}

/// Main error type for the file-backed ledger front end
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A date could not be parsed as `YYYY-MM-DD`
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// The round could not be settled
    #[error(transparent)]
    Settlement(#[from] SettlementError),

    /// The async runtime could not be started or a task failed
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        LedgerError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(value: &str) -> Self {
        LedgerError::InvalidDate {
            value: value.to_string(),
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl fmt::Display) -> Self {
        LedgerError::Runtime {
            message: message.to_string(),
        }
    }
}
