// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Binding to the deployed counter contract.

use alloy::{
    network::Network,
    primitives::{address, Address},
    providers::Provider,
    sol,
};

/// Default deployment of the counter contract.
pub const COUNTER_ADDRESS: Address = address!("0x8384738c995d49c5b692560ae688fc8b51af1059");

sol! {
    #[sol(rpc)]
    interface ICounter {
        function counter() external view returns (uint256);
        function increment() external;
    }
}

/// Binds the counter ABI to `address` through `provider`.
pub fn counter<P: Provider<N>, N: Network>(
    address: Address,
    provider: P,
) -> ICounter::ICounterInstance<P, N> {
    ICounter::new(address, provider)
}
