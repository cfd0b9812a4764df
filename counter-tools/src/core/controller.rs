// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Display/controller for the counter.
//!
//! The controller owns the observable state: the last counter value read from the ledger, the
//! handle of the last submitted increment and its [`TransactionStatus`]. Every change is published
//! through a [`watch`] channel so renderers see the transaction go `pending` while the controller
//! is suspended on the receipt.

use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

use alloy::primitives::{TxHash, U256};
use tokio::sync::watch;

use crate::{
    core::{
        ledger::{Ledger, LedgerError, Receipt},
        status::TransactionStatus,
        wallet::WalletSession,
    },
    utils::color::{Color, DebugColor},
};

/// Snapshot of everything a renderer shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterView {
    /// Last value successfully read from the ledger. Never updated ahead of confirmation.
    pub value: U256,
    pub tx_hash: Option<TxHash>,
    pub status: TransactionStatus,
    /// Message of the last failure, cleared by the next successful read or submission.
    pub error: Option<String>,
}

impl CounterView {
    pub fn is_pending(&self) -> bool {
        self.status == TransactionStatus::Pending
    }
}

impl fmt::Display for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Counter Value: {}", self.value)?;
        if let Some(tx_hash) = self.tx_hash {
            write!(f, "\nSent Transaction ID: {tx_hash} ({})", self.status)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementOutcome {
    /// No wallet account is connected. Nothing was called and nothing changed.
    NoAccount,
    /// Another increment is still in flight. Nothing was called and nothing changed.
    InFlight,
    /// The transaction was finalized and the counter re-read.
    Completed { receipt: Receipt, value: U256 },
}

#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    #[error("failed to read counter: {0}")]
    Read(#[source] LedgerError),
    #[error("increment would fail: {0}")]
    Simulation(#[source] LedgerError),
    #[error("failed to submit increment tx: {0}")]
    Submission(#[source] LedgerError),
    #[error("increment tx {tx_hash} was not confirmed: {source}")]
    Confirmation {
        tx_hash: TxHash,
        #[source]
        source: LedgerError,
    },
}

pub struct CounterController<L, W> {
    ledger: L,
    wallet: W,
    view: watch::Sender<CounterView>,
    in_flight: AtomicBool,
}

impl<L: Ledger, W: WalletSession> CounterController<L, W> {
    /// Creates a controller without touching the ledger. See [`Self::mount`].
    pub fn new(ledger: L, wallet: W) -> Self {
        Self {
            ledger,
            wallet,
            view: watch::Sender::new(CounterView::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Creates a controller and performs the initial read.
    ///
    /// A failed read is recorded in the view rather than returned, so the controller is usable
    /// either way.
    pub async fn mount(ledger: L, wallet: W) -> Self {
        let controller = Self::new(ledger, wallet);
        if let Err(err) = controller.initialize_and_read().await {
            debug!(@grey, "initial read failed: {err}");
        }
        controller
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn view(&self) -> CounterView {
        self.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CounterView> {
        self.view.subscribe()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Swaps the ledger client and re-reads the counter through the new one.
    pub async fn replace_ledger(&mut self, ledger: L) -> Result<U256, CounterError> {
        self.ledger = ledger;
        self.initialize_and_read().await
    }

    /// Reads the counter and stores it.
    ///
    /// On failure the last known value is kept and the error is surfaced in the view.
    pub async fn initialize_and_read(&self) -> Result<U256, CounterError> {
        match self.ledger.read_counter().await {
            Ok(value) => {
                debug!(@grey, "counter value: {}", value.lavender());
                self.view.send_modify(|view| {
                    view.value = value;
                    view.error = None;
                });
                Ok(value)
            }
            Err(err) => {
                warn!(@yellow, "failed to read counter: {err}");
                self.view
                    .send_modify(|view| view.error = Some(err.to_string()));
                Err(CounterError::Read(err))
            }
        }
    }

    /// Runs one simulate, submit, confirm and refresh cycle for the connected account.
    pub async fn handle_increment(&self) -> Result<IncrementOutcome, CounterError> {
        let Some(account) = self.wallet.current_account() else {
            return Ok(IncrementOutcome::NoAccount);
        };
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!(@grey, "increment already in flight");
            return Ok(IncrementOutcome::InFlight);
        };

        let request = match self.ledger.simulate_increment(account).await {
            Ok(request) => request,
            Err(err) => {
                warn!(@yellow, "increment simulation failed: {err}");
                self.view
                    .send_modify(|view| view.error = Some(err.to_string()));
                return Err(CounterError::Simulation(err));
            }
        };

        let tx_hash = match self.ledger.submit(request).await {
            Ok(tx_hash) => tx_hash,
            Err(err) => {
                warn!(@yellow, "failed to submit increment tx: {err}");
                self.view.send_modify(|view| {
                    view.tx_hash = None;
                    view.status = TransactionStatus::Unset;
                    view.error = Some(err.to_string());
                });
                return Err(CounterError::Submission(err));
            }
        };
        info!(@grey, "sent increment tx: {}", tx_hash.debug_lavender());
        self.view.send_modify(|view| {
            view.tx_hash = Some(tx_hash);
            view.status = TransactionStatus::Pending;
            view.error = None;
        });

        let receipt = match self.ledger.wait_for_receipt(tx_hash).await {
            Ok(receipt) => receipt,
            Err(err) => {
                warn!(@yellow, "increment tx {tx_hash} was not confirmed: {err}");
                self.view.send_modify(|view| {
                    view.status = TransactionStatus::Unknown;
                    view.error = Some(err.to_string());
                });
                return Err(CounterError::Confirmation {
                    tx_hash,
                    source: err,
                });
            }
        };
        debug!(
            @grey,
            "increment tx {} finalized in block {:?} with status {} ({} gas used)",
            tx_hash,
            receipt.block_number,
            receipt.status,
            receipt.gas_used
        );
        self.view.send_modify(|view| view.status = receipt.status);

        let value = self.initialize_and_read().await?;
        Ok(IncrementOutcome::Completed { receipt, value })
    }
}

/// Holds the in-flight flag for the duration of one increment.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
