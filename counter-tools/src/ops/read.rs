// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    core::{
        controller::CounterController,
        ledger::{ContractLedger, LedgerConfig},
    },
    ops::print_view,
};

/// Reads the counter at `address` and prints it.
pub async fn counter(
    address: Address,
    config: LedgerConfig,
    provider: impl Provider,
) -> eyre::Result<U256> {
    let ledger = ContractLedger::new(address, provider, config);
    let controller = CounterController::new(ledger, None::<Address>);
    let value = controller.initialize_and_read().await?;
    print_view(&controller.view());
    Ok(value)
}
