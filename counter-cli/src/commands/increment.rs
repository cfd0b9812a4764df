// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::signers::Signer;
use counter_tools::ops;

use crate::{
    common_args::{AuthArgs, ContractArgs, ProviderArgs, ReceiptArgs},
    error::CliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    receipt: ReceiptArgs,
}

pub async fn exec(args: Args) -> CliResult {
    let address = args.contract.address;
    let config = args.receipt.config();
    // Without a key source the wallet is disconnected and the increment is a no-op.
    match args.auth.build_signer()? {
        Some(signer) => {
            let account = signer.address();
            let provider = args.provider.build_provider_with_signer(signer).await?;
            ops::increment::counter(address, config, Some(account), provider).await?;
        }
        None => {
            let provider = args.provider.build_provider().await?;
            ops::increment::counter(address, config, None, provider).await?;
        }
    }
    Ok(())
}
