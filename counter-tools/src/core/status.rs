// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

/// Lifecycle of the most recent increment transaction.
///
/// Moves from [`Unset`](Self::Unset) to [`Pending`](Self::Pending) once a transaction is
/// submitted, and then to one of the terminal states. A new submission starts over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    #[default]
    Unset,
    Pending,
    /// The ledger included the transaction and it executed successfully.
    Success,
    /// The ledger included the transaction but execution reverted.
    Reverted,
    /// The receipt never arrived, so the outcome is not known.
    Unknown,
}

impl TransactionStatus {
    /// Maps the status flag of a receipt.
    pub fn from_receipt(succeeded: bool) -> Self {
        if succeeded {
            Self::Success
        } else {
            Self::Reverted
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Reverted | Self::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Reverted => "reverted",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_flag_maps_to_terminal_status() {
        assert_eq!(TransactionStatus::from_receipt(true), TransactionStatus::Success);
        assert_eq!(TransactionStatus::from_receipt(false), TransactionStatus::Reverted);
        assert!(TransactionStatus::Unknown.is_terminal());
        assert!(!TransactionStatus::Pending.is_terminal());
        assert!(!TransactionStatus::default().is_terminal());
    }

    #[test]
    fn displays_ledger_labels() {
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
        assert_eq!(TransactionStatus::Reverted.to_string(), "reverted");
        assert_eq!(TransactionStatus::Unset.to_string(), "");
    }
}
