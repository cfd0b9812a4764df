// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Wallet session seam.
//!
//! The controller only needs to know which account, if any, is connected. Signing is the
//! ledger's concern.

use std::sync::Arc;

use alloy::{
    primitives::Address,
    signers::{local::PrivateKeySigner, Signer},
};
use parking_lot::RwLock;

pub trait WalletSession {
    /// The connected account, or `None` when no wallet is connected.
    fn current_account(&self) -> Option<Address>;
}

impl WalletSession for Option<Address> {
    fn current_account(&self) -> Option<Address> {
        *self
    }
}

impl WalletSession for PrivateKeySigner {
    fn current_account(&self) -> Option<Address> {
        Some(self.address())
    }
}

impl<T: WalletSession + ?Sized> WalletSession for &T {
    fn current_account(&self) -> Option<Address> {
        (**self).current_account()
    }
}

impl<T: WalletSession + ?Sized> WalletSession for Arc<T> {
    fn current_account(&self) -> Option<Address> {
        (**self).current_account()
    }
}

/// A session whose account can be connected and disconnected while it is shared.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    account: Arc<RwLock<Option<Address>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected(account: Address) -> Self {
        let session = Self::new();
        session.connect(account);
        session
    }

    /// Connects `account`, returning the previously connected one.
    pub fn connect(&self, account: Address) -> Option<Address> {
        self.account.write().replace(account)
    }

    pub fn disconnect(&self) -> Option<Address> {
        self.account.write().take()
    }
}

impl WalletSession for SharedSession {
    fn current_account(&self) -> Option<Address> {
        *self.account.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_session_tracks_connection_state() {
        let account = Address::repeat_byte(0x11);
        let session = SharedSession::new();
        let observer = session.clone();
        assert_eq!(observer.current_account(), None);

        assert_eq!(session.connect(account), None);
        assert_eq!(observer.current_account(), Some(account));

        assert_eq!(session.disconnect(), Some(account));
        assert_eq!(observer.current_account(), None);
    }

    #[test]
    fn signer_is_always_connected() {
        let signer: PrivateKeySigner =
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse()
                .unwrap();
        assert_eq!(signer.current_account(), Some(signer.address()));
    }
}
