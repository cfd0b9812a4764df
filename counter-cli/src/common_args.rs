// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, FixedBytes},
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use counter_tools::{utils::timeout_from_secs, LedgerConfig, COUNTER_ADDRESS};
use eyre::{eyre, Context};

use crate::{constants::DEFAULT_ENDPOINT, utils::decode0x};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Builds the signer for the connected account, or `None` if no key source was given.
    pub fn build_signer(&self) -> eyre::Result<Option<PrivateKeySigner>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return signer_from_hex(key).map(Some);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return signer_from_hex(key).map(Some);
        }

        let Some(keystore) = &self.keystore_path else {
            return Ok(None);
        };
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))
            .wrap_err("could not open keystore password file")?;
        let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())?;
        Ok(Some(signer))
    }

    /// Like [`AuthArgs::build_signer`], but fails if no key source was given.
    pub fn require_signer(&self) -> eyre::Result<PrivateKeySigner> {
        self.build_signer()?.ok_or_else(|| {
            eyre!("no wallet account: pass --private-key, --private-key-path or --keystore-path")
        })
    }
}

fn signer_from_hex(key: impl AsRef<str>) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Address of the deployed counter contract
    #[arg(long, default_value_t = COUNTER_ADDRESS)]
    pub address: Address,
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the node serving the counter contract
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    pub async fn build_provider(&self) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(&self.endpoint).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_signer(
        &self,
        signer: PrivateKeySigner,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider().await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = EthereumWallet::new(signer.with_chain_id(Some(chain_id)));
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct ReceiptArgs {
    /// Seconds to wait for the transaction receipt (0 waits indefinitely)
    #[arg(long, default_value = "0")]
    receipt_timeout_secs: u64,
    /// Number of confirmations to wait for before reporting the outcome
    #[arg(long, default_value = "1")]
    confirmations: u64,
}

impl ReceiptArgs {
    pub fn config(&self) -> LedgerConfig {
        LedgerConfig {
            receipt_timeout: timeout_from_secs(self.receipt_timeout_secs),
            required_confirmations: self.confirmations,
        }
    }
}
