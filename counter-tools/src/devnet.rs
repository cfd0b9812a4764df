// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    providers::{Provider, ProviderBuilder, WalletProvider},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol_types::SolCall,
};
use eyre::{eyre, Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::contract::ICounter;

pub const DEVNET_PRIVATE_KEY: &str =
    "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

const NITRO_IMAGE_NAME: &str = "offchainlabs/nitro-node";
const NITRO_IMAGE_TAG: &str = "v3.5.6-9a29a1e";
const NITRO_PORT: u16 = 8547;

/// Manage a devnet node for exercising the counter contract.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Nitro devnode in the background.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(NITRO_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(nitro_response_matcher);
        let container = GenericImage::new(NITRO_IMAGE_NAME, NITRO_IMAGE_TAG)
            .with_exposed_port(NITRO_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![
                "--dev",
                "--http.addr",
                "0.0.0.0",
                "--http.api=net,web3,eth,debug",
            ])
            .start()
            .await
            .wrap_err("failed to start Nitro container")?;
        let port = container
            .get_host_port_ipv4(NITRO_PORT)
            .await
            .wrap_err("failed to get Nitro RPC port")?;
        let rpc = format!("http://localhost:{port}");
        Ok(Node {
            _container: container,
            rpc,
        })
    }

    /// Get the Nitro node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Create a provider signing with the funded devnet account.
    pub async fn create_provider(&self) -> Result<impl Provider + WalletProvider> {
        let signer: PrivateKeySigner = DEVNET_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse devnet private key")?;
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }

    /// Deploys a fresh counter contract starting at zero, returning its address.
    pub async fn deploy_counter(&self) -> Result<Address> {
        let provider = self.create_provider().await?;
        let tx = TransactionRequest::default().with_deploy_code(counter_init_code());
        let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
        if !receipt.status() {
            return Err(eyre!(
                "counter deployment reverted in tx {}",
                receipt.transaction_hash
            ));
        }
        receipt
            .contract_address
            .ok_or_else(|| eyre!("no contract address in deployment receipt"))
    }
}

/// Runtime code implementing `counter()` and `increment()` over storage slot 0.
fn counter_runtime_code() -> Vec<u8> {
    // selector = calldata[0..4]
    let mut code = vec![0x60, 0x00, 0x35, 0x60, 0xe0, 0x1c, 0x80, 0x63];
    code.extend_from_slice(&ICounter::counterCall::SELECTOR);
    // jump to `counter` at 0x1d
    code.extend_from_slice(&[0x14, 0x60, 0x1d, 0x57, 0x63]);
    code.extend_from_slice(&ICounter::incrementCall::SELECTOR);
    // jump to `increment` at 0x29, otherwise revert
    code.extend_from_slice(&[0x14, 0x60, 0x29, 0x57, 0x60, 0x00, 0x80, 0xfd]);
    // counter: return sload(0)
    code.extend_from_slice(&[
        0x5b, 0x60, 0x00, 0x54, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0xf3,
    ]);
    // increment: sstore(0, sload(0) + 1)
    code.extend_from_slice(&[
        0x5b, 0x60, 0x00, 0x54, 0x60, 0x01, 0x01, 0x60, 0x00, 0x55, 0x00,
    ]);
    code
}

/// Init code copying [`counter_runtime_code`] into memory and returning it.
fn counter_init_code() -> Vec<u8> {
    let runtime = counter_runtime_code();
    let mut code = vec![
        0x60,
        runtime.len() as u8,
        0x80,
        0x60,
        0x0b,
        0x60,
        0x00,
        0x39,
        0x60,
        0x00,
        0xf3,
    ];
    code.extend(runtime);
    code
}

async fn nitro_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    const JUMPDEST: u8 = 0x5b;

    #[test]
    fn runtime_jump_targets_are_jumpdests() {
        let code = counter_runtime_code();
        assert_eq!(code.len(), 52);
        assert_eq!(code[0x1d], JUMPDEST);
        assert_eq!(code[0x29], JUMPDEST);
    }

    #[test]
    fn init_code_returns_the_runtime() {
        let init = counter_init_code();
        assert_eq!(init.len(), 11 + 52);
        assert_eq!(init[1], 52);
        assert_eq!(&init[11..], counter_runtime_code().as_slice());
    }

    #[tokio::test]
    async fn node_deploys_counter() -> Result<()> {
        let devnode = Node::new().await?;
        let address = devnode.deploy_counter().await?;
        let provider = devnode.create_provider().await?;
        let code = provider.get_code_at(address).await?;
        assert_eq!(code.len(), 52);
        let counter = ICounter::new(address, &provider);
        assert_eq!(counter.counter().call().await?, U256::ZERO);
        Ok(())
    }
}
