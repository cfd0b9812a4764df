// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Ledger seam and its alloy implementation.
//!
//! A [`Ledger`] exposes the four calls the controller makes against the counter contract: a view
//! call, a dry-run of `increment()`, the broadcast of the prepared transaction and the wait for
//! its receipt.

use std::time::Duration;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol_types::decode_revert_reason,
};

use crate::{
    core::{
        contract::{self, ICounter},
        status::TransactionStatus,
    },
    utils::{color::DebugColor, format_gas},
};

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// How long to wait for a receipt before giving up. `None` waits indefinitely.
    pub receipt_timeout: Option<Duration>,
    pub required_confirmations: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            receipt_timeout: None,
            required_confirmations: 1,
        }
    }
}

/// A transaction validated by simulation, ready to be signed and broadcast.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub tx: TransactionRequest,
}

impl PreparedRequest {
    pub fn sender(&self) -> Option<Address> {
        self.tx.from
    }

    pub fn gas_limit(&self) -> Option<u64> {
        self.tx.gas
    }
}

/// Finalized outcome of a submitted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub tx_hash: TxHash,
    pub status: TransactionStatus,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl From<&TransactionReceipt> for Receipt {
    fn from(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            status: TransactionStatus::from_receipt(receipt.status()),
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait Ledger {
    /// Reads the current counter value.
    async fn read_counter(&self) -> Result<U256, LedgerError>;

    /// Dry-runs `increment()` from `sender`, failing if the call would revert.
    async fn simulate_increment(&self, sender: Address) -> Result<PreparedRequest, LedgerError>;

    /// Signs and broadcasts a prepared request.
    async fn submit(&self, request: PreparedRequest) -> Result<TxHash, LedgerError>;

    /// Resolves once the ledger has finalized the transaction.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for &L {
    async fn read_counter(&self) -> Result<U256, LedgerError> {
        (**self).read_counter().await
    }

    async fn simulate_increment(&self, sender: Address) -> Result<PreparedRequest, LedgerError> {
        (**self).simulate_increment(sender).await
    }

    async fn submit(&self, request: PreparedRequest) -> Result<TxHash, LedgerError> {
        (**self).submit(request).await
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError> {
        (**self).wait_for_receipt(tx_hash).await
    }
}

/// A [`Ledger`] talking to a deployed counter contract through an alloy provider.
///
/// The contract binding is built once and lives as long as the provider it wraps.
pub struct ContractLedger<P> {
    contract: ICounter::ICounterInstance<P>,
    config: LedgerConfig,
}

impl<P: Provider> ContractLedger<P> {
    pub fn new(address: Address, provider: P, config: LedgerConfig) -> Self {
        Self {
            contract: contract::counter(address, provider),
            config,
        }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    pub fn provider(&self) -> &P {
        self.contract.provider()
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

impl<P: Provider> Ledger for ContractLedger<P> {
    async fn read_counter(&self) -> Result<U256, LedgerError> {
        Ok(self.contract.counter().call().await?)
    }

    async fn simulate_increment(&self, sender: Address) -> Result<PreparedRequest, LedgerError> {
        let call = self.contract.increment().from(sender);
        call.call().await?;
        let gas = call.estimate_gas().await?;
        debug!(
            @grey,
            "simulated increment from {}: {}",
            sender.debug_lavender(),
            format_gas(gas)
        );
        let tx = call.into_transaction_request().with_gas_limit(gas);
        Ok(PreparedRequest { tx })
    }

    async fn submit(&self, request: PreparedRequest) -> Result<TxHash, LedgerError> {
        let pending = self.provider().send_transaction(request.tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError> {
        let receipt = PendingTransactionBuilder::new(self.provider().root().clone(), tx_hash)
            .with_required_confirmations(self.config.required_confirmations)
            .with_timeout(self.config.receipt_timeout)
            .get_receipt()
            .await?;
        debug!(@grey, "receipt: {receipt:?}");
        Ok(Receipt::from(&receipt))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("contract error: {0}")]
    Contract(alloy::contract::Error),
    #[error("pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("execution reverted{}", format_reason(.reason))]
    Reverted { reason: Option<String> },
}

impl LedgerError {
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted { .. })
    }
}

impl From<alloy::contract::Error> for LedgerError {
    fn from(err: alloy::contract::Error) -> Self {
        match err.as_revert_data() {
            Some(data) => Self::Reverted {
                reason: decode_revert_reason(&data).filter(|reason| !reason.is_empty()),
            },
            None => Self::Contract(err),
        }
    }
}

fn format_reason(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {reason}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use alloy::transports::TransportErrorKind;

    use super::*;

    #[test]
    fn revert_message_includes_reason_when_known() {
        let err = LedgerError::Reverted {
            reason: Some("counter paused".to_owned()),
        };
        assert_eq!(err.to_string(), "execution reverted: counter paused");
        assert!(err.is_revert());

        let err = LedgerError::Reverted { reason: None };
        assert_eq!(err.to_string(), "execution reverted");
    }

    #[test]
    fn transport_errors_are_not_reverts() {
        let err = LedgerError::from(TransportErrorKind::custom_str("connection refused"));
        assert!(!err.is_revert());
    }

    #[test]
    fn prepared_request_exposes_sender_and_gas() {
        let sender = Address::repeat_byte(0x22);
        let request = PreparedRequest {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_gas_limit(26_000),
        };
        assert_eq!(request.sender(), Some(sender));
        assert_eq!(request.gas_limit(), Some(26_000));
    }

    #[test]
    fn default_config_waits_for_one_confirmation_without_timeout() {
        let config = LedgerConfig::default();
        assert_eq!(config.required_confirmations, 1);
        assert_eq!(config.receipt_timeout, None);
    }
}
