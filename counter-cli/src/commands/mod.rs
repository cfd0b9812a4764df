// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CliResult;

mod increment;
mod read;
mod simulate;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Read the current counter value
    #[command(visible_alias = "r")]
    Read(read::Args),
    /// Dry-run an increment from the configured account and report its gas cost
    #[command(visible_alias = "s")]
    Simulate(simulate::Args),
    /// Increment the counter and wait for the transaction to settle
    #[command(visible_alias = "i")]
    Increment(increment::Args),
}

pub async fn exec(cmd: Command) -> CliResult {
    match cmd {
        Command::Read(args) => read::exec(args).await,
        Command::Simulate(args) => simulate::exec(args).await,
        Command::Increment(args) => increment::exec(args).await,
    }
}
