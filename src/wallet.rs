//! Wallet capability consumed by the front-end
//!
//! The shell only reads `is_connected`/`address`; `connect`/`disconnect`
//! are triggered by the user's wallet key and nothing else.

use crate::error::WalletError;

/// A wallet provider exposing one account
pub trait WalletConnection: Send {
    fn is_connected(&self) -> bool;

    /// Account address, `None` while disconnected
    fn address(&self) -> Option<&str>;

    fn connect(&mut self) -> Result<(), WalletError>;

    fn disconnect(&mut self);
}

/// Wallet backed by an account named in the config file
#[derive(Clone, Debug, Default)]
pub struct ConfiguredWallet {
    account: Option<String>,
    connected: bool,
}

impl ConfiguredWallet {
    pub fn new(account: Option<String>) -> Self {
        let account = account
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        ConfiguredWallet {
            account,
            connected: false,
        }
    }
}

impl WalletConnection for ConfiguredWallet {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn address(&self) -> Option<&str> {
        if self.connected {
            self.account.as_deref()
        } else {
            None
        }
    }

    fn connect(&mut self) -> Result<(), WalletError> {
        if self.account.is_none() {
            return Err(WalletError::NoAccount);
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }
}
