// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    primitives::{utils::format_units, Address},
    providers::Provider,
};

use crate::{
    core::ledger::{ContractLedger, Ledger, LedgerConfig},
    utils::{
        color::{Color, DebugColor},
        format_gas, format_tx_cost,
    },
};

/// Dry-runs `increment()` from `sender` without broadcasting anything, printing the gas it would
/// cost.
pub async fn increment(
    address: Address,
    sender: Address,
    provider: impl Provider,
) -> eyre::Result<()> {
    let ledger = ContractLedger::new(address, provider, LedgerConfig::default());
    let request = ledger.simulate_increment(sender).await?;
    let gas = request.gas_limit().unwrap_or_default();
    let gas_price = ledger.provider().get_gas_price().await?;

    greyln!("increment from {} would succeed", sender.debug_lavender());
    greyln!("increment tx gas: {}", format_gas(gas));
    greyln!(
        "gas price: {} gwei",
        format_units(gas_price, "gwei")?.debug_lavender()
    );
    greyln!(
        "increment tx total cost: {}",
        format_tx_cost(gas, gas_price).lavender()
    );
    Ok(())
}
