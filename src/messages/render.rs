//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{BalanceSnapshot, BalanceStatus, Network, Notification};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Network selector
    pub network: Network,
    pub networks: Vec<Network>,

    // Claim panel
    pub address: String,
    pub cursor_position: usize,
    pub address_locked: bool,
    pub claim_loading: bool,
    pub last_claim_message: Option<String>,

    // Wallet
    pub wallet_connected: bool,
    pub wallet_address: Option<String>,

    // Balance panel
    pub balance: Option<BalanceSnapshot>,
    pub balance_status: Option<BalanceStatus>,
    pub balance_loading: bool,

    // Toast
    pub notification: Option<Notification>,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Info card
    pub token_symbol: String,
    pub cooldown_hours: u32,
    pub max_claim: u32,
}

impl RenderState {
    /// Whether the loading overlay should be drawn
    pub fn is_busy(&self) -> bool {
        self.claim_loading || self.balance_loading
    }
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::{DEFAULT_COOLDOWN_HOURS, DEFAULT_MAX_CLAIM, DEFAULT_TOKEN_SYMBOL};
        RenderState {
            network: Network::Testnet,
            networks: vec![Network::Testnet, Network::Devnet],
            address: String::new(),
            cursor_position: 0,
            address_locked: false,
            claim_loading: false,
            last_claim_message: None,
            wallet_connected: false,
            wallet_address: None,
            balance: None,
            balance_status: None,
            balance_loading: false,
            notification: None,
            active_panel: Panel::Claim,
            input_mode: InputMode::Normal,
            show_help: false,
            token_symbol: String::from(DEFAULT_TOKEN_SYMBOL),
            cooldown_hours: DEFAULT_COOLDOWN_HOURS,
            max_claim: DEFAULT_MAX_CLAIM,
        }
    }
}
