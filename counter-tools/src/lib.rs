// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for reading and incrementing an on-chain counter.
//!
//! The [`CounterController`](core::controller::CounterController) owns the observable state
//! (counter value, transaction handle and status) and drives the read, simulate, submit, confirm
//! and refresh cycle against a [`Ledger`](core::ledger::Ledger).

#[macro_use]
mod macros;

pub mod core;
pub mod ops;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use crate::core::{
    contract::COUNTER_ADDRESS,
    controller::{CounterController, CounterError, CounterView, IncrementOutcome},
    ledger::{ContractLedger, Ledger, LedgerConfig, LedgerError, PreparedRequest, Receipt},
    status::TransactionStatus,
    wallet::{SharedSession, WalletSession},
};
