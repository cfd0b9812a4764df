// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod contract;
pub mod controller;
pub mod ledger;
pub mod status;
pub mod wallet;
