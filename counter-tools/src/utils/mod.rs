// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use std::time::Duration;

use alloy::primitives::{utils::format_units, U256};

use color::Color;

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Pretty-prints an amount of gas based on how expensive it is for a single call.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 100_000 {
        text.mint()
    } else if gas <= 1_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Pretty-prints the total cost of `gas` at `gas_price` wei per gas, in ETH.
pub fn format_tx_cost(gas: u64, gas_price: u128) -> String {
    let total = U256::from(gas_price).saturating_mul(U256::from(gas));
    match format_units(total, "ether") {
        Ok(eth) => format!("{eth} ETH"),
        Err(_) => "???".red(),
    }
}

/// Converts a timeout given in whole seconds, where zero means "no timeout".
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seconds_disables_the_timeout() {
        assert_eq!(timeout_from_secs(0), None);
        assert_eq!(timeout_from_secs(30), Some(Duration::from_secs(30)));
    }

    #[test]
    fn tx_cost_is_expressed_in_ether() {
        assert_eq!(format_tx_cost(21_000, 1_000_000_000), "0.000021000000000000 ETH");
    }
}
