// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Scripted in-memory ledger for controller tests.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use alloy::{
    network::TransactionBuilder,
    primitives::{b256, Address, TxHash, U256},
    rpc::types::TransactionRequest,
    transports::TransportErrorKind,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::core::{
    ledger::{Ledger, LedgerError, PreparedRequest, Receipt},
    status::TransactionStatus,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    Read,
    Simulate(Address),
    Submit,
    WaitForReceipt(TxHash),
}

/// How the mock resolves a receipt wait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Confirmation {
    /// Applies the increment and reports success.
    #[default]
    Success,
    /// Reports a reverted transaction; the counter is unchanged.
    Reverted,
    /// The wait fails without an outcome.
    Lost,
}

#[derive(Default)]
pub struct MockLedger {
    pub value: Mutex<U256>,
    pub fail_reads: AtomicBool,
    /// Makes simulation revert with this reason.
    pub revert_reason: Mutex<Option<String>>,
    pub reject_submission: AtomicBool,
    pub confirmation: Mutex<Confirmation>,
    /// When set, receipt waits block until the gate is notified.
    pub gate: Option<Arc<Notify>>,
    pub tx_hash: TxHash,
    pub calls: Mutex<Vec<Call>>,
}

impl MockLedger {
    pub fn with_value(value: u64) -> Self {
        Self {
            value: Mutex::new(U256::from(value)),
            tx_hash: b256!("0x0000000000000000000000000000000000000000000000000000000000000abc"),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

impl Ledger for MockLedger {
    async fn read_counter(&self) -> Result<U256, LedgerError> {
        self.record(Call::Read);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(TransportErrorKind::custom_str("connection refused").into());
        }
        Ok(*self.value.lock())
    }

    async fn simulate_increment(&self, sender: Address) -> Result<PreparedRequest, LedgerError> {
        self.record(Call::Simulate(sender));
        if let Some(reason) = self.revert_reason.lock().clone() {
            return Err(LedgerError::Reverted {
                reason: Some(reason),
            });
        }
        Ok(PreparedRequest {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_gas_limit(26_000),
        })
    }

    async fn submit(&self, request: PreparedRequest) -> Result<TxHash, LedgerError> {
        self.record(Call::Submit);
        assert!(request.sender().is_some(), "submitted an unsimulated request");
        if self.reject_submission.load(Ordering::SeqCst) {
            return Err(TransportErrorKind::custom_str("user rejected the request").into());
        }
        Ok(self.tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError> {
        self.record(Call::WaitForReceipt(tx_hash));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let confirmation = *self.confirmation.lock();
        let status = match confirmation {
            Confirmation::Success => {
                *self.value.lock() += U256::from(1);
                TransactionStatus::Success
            }
            Confirmation::Reverted => TransactionStatus::Reverted,
            Confirmation::Lost => {
                return Err(TransportErrorKind::custom_str("receipt wait timed out").into());
            }
        };
        Ok(Receipt {
            tx_hash,
            status,
            block_number: Some(1),
            gas_used: 26_000,
        })
    }
}
