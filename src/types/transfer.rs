//! Transfer instruction type
//!
//! The settlement engine's output: who pays whom, and how much.

use super::round::NetAmount;
use std::fmt;

/// A single peer-to-peer payment that settles part of a round
///
/// The settlement engine guarantees `amount > 0` and `from != to` for every
/// instruction it emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferInstruction {
    /// Player who pays (a loser of the round)
    pub from: String,

    /// Player who receives (a gainer of the round)
    pub to: String,

    /// Amount paid
    pub amount: NetAmount,
}

impl TransferInstruction {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: NetAmount) -> Self {
        TransferInstruction {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

impl fmt::Display for TransferInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} {}", self.from, self.to, self.amount)
    }
}
