//! Claim panel - destination address and claim submission

use std::collections::BTreeSet;

use crate::constants::{MIN_ADDRESS_LEN, MSG_CLAIM_FAILED, MSG_CLAIM_SUCCESS, MSG_EMPTY_ADDRESS};
use crate::error::{FaucetError, FaucetResult};
use crate::models::{ClaimRequest, Network, Notification};

/// Claim panel state
#[derive(Clone, Debug, Default)]
pub struct ClaimPanel {
    pub address: String,
    pub cursor_position: usize,
    /// Set while a wallet is connected; the address then mirrors the wallet
    pub locked: bool,
    pub last_success: Option<String>,
    pending: BTreeSet<u64>,
}

impl ClaimPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Replace the editable address. Ignored while locked to the wallet.
    pub fn set_address(&mut self, value: impl Into<String>) {
        if self.locked {
            return;
        }
        self.address = value.into();
        self.cursor_position = self.address.len();
    }

    /// Follow the wallet: lock onto its address on connect, release on disconnect
    pub fn sync_wallet(&mut self, connected: bool, address: Option<&str>) {
        match (connected, address) {
            (true, Some(addr)) => {
                self.address = addr.to_string();
                self.cursor_position = self.address.len();
                self.locked = true;
            }
            _ => self.locked = false,
        }
    }

    /// Check the address and build the request body
    pub fn validate(&self, network: Network) -> FaucetResult<ClaimRequest> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(FaucetError::Validation(MSG_EMPTY_ADDRESS.to_string()));
        }
        if address.chars().count() < MIN_ADDRESS_LEN {
            return Err(FaucetError::Validation(format!(
                "Invalid wallet address: expected at least {} characters",
                MIN_ADDRESS_LEN
            )));
        }
        Ok(ClaimRequest {
            address: address.to_string(),
            network,
        })
    }

    /// Mark request `id` as in flight
    pub fn begin(&mut self, id: u64) {
        self.pending.insert(id);
        self.last_success = None;
    }

    /// Settle request `id`. Returns the notification to surface, or `None`
    /// when `id` was not one of ours.
    pub fn complete(&mut self, id: u64, result: FaucetResult<Option<String>>) -> Option<Notification> {
        if !self.pending.remove(&id) {
            return None;
        }
        match result {
            Ok(message) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| MSG_CLAIM_SUCCESS.to_string());
                self.last_success = Some(message.clone());
                Some(Notification::success(message))
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "Claim failed");
                Some(Notification::error(err.user_message(MSG_CLAIM_FAILED)))
            }
        }
    }

    // ========================
    // Input editing
    // ========================

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.address[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.address.len() {
            self.cursor_position = self.address[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.address.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.locked || self.cursor_position > self.address.len() {
            return;
        }
        self.address.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.locked || self.cursor_position == 0 {
            return;
        }
        let prev_pos = self.address[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.address.remove(prev_pos);
        self.cursor_position = prev_pos;
    }
}
