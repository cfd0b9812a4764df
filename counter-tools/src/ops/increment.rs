// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{primitives::Address, providers::Provider};

use crate::{
    core::{
        controller::{CounterController, IncrementOutcome},
        ledger::{ContractLedger, LedgerConfig},
        status::TransactionStatus,
    },
    ops::print_view,
};

/// Mounts the counter at `address`, runs one increment cycle for `account` and prints every state
/// change along the way.
pub async fn counter(
    address: Address,
    config: LedgerConfig,
    account: Option<Address>,
    provider: impl Provider,
) -> eyre::Result<IncrementOutcome> {
    let ledger = ContractLedger::new(address, provider, config);
    let controller = CounterController::mount(ledger, account).await;
    let mut updates = controller.subscribe();
    print_view(&updates.borrow_and_update());

    let cycle = controller.handle_increment();
    tokio::pin!(cycle);
    let outcome = loop {
        tokio::select! {
            outcome = &mut cycle => break outcome,
            Ok(()) = updates.changed() => print_view(&updates.borrow_and_update()),
        }
    };
    if updates.has_changed().unwrap_or_default() {
        print_view(&updates.borrow_and_update());
    }

    let outcome = outcome?;
    match outcome {
        IncrementOutcome::NoAccount => {
            greyln!("no wallet account connected, nothing to increment");
        }
        IncrementOutcome::InFlight => {
            greyln!("an increment is already in flight");
        }
        IncrementOutcome::Completed { receipt, value } => match receipt.status {
            TransactionStatus::Success => mintln!("counter incremented to {value}"),
            status => {
                warn!(@yellow, "increment tx finished with status {status}, counter is {value}")
            }
        },
    }
    Ok(outcome)
}
