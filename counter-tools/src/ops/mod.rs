// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Terminal-facing operations on the counter.
//!
//! Each operation wraps the controller or ledger and prints what a user needs to see.

use crate::{
    core::{controller::CounterView, status::TransactionStatus},
    utils::color::{Color, DebugColor},
};

pub mod increment;
pub mod read;
pub mod simulate;

/// Prints the observable state of the counter.
pub fn print_view(view: &CounterView) {
    greyln!("Current Counter Value: {}", view.value.lavender());
    if let Some(tx_hash) = view.tx_hash {
        greyln!(
            "Sent Transaction ID: {} ({})",
            tx_hash.debug_lavender(),
            format_status(view.status)
        );
    }
    if let Some(err) = &view.error {
        greyln!("{}", format!("error: {err}").red());
    }
}

pub fn format_status(status: TransactionStatus) -> String {
    match status {
        TransactionStatus::Unset => status.grey(),
        TransactionStatus::Pending => status.yellow(),
        TransactionStatus::Success => status.mint(),
        TransactionStatus::Reverted => status.red(),
        TransactionStatus::Unknown => status.pink(),
    }
}
