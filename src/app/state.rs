//! App state - pure data structure with no I/O logic

use std::time::Instant;

use crate::app::balance::BalancePanel;
use crate::app::claim::ClaimPanel;
use crate::app::notification::NotificationSlot;
use crate::config::{AppConfig, NetworkConfig};
use crate::constants::NOTIFICATION_TTL;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Network, Notification};

/// Main application state - the shell owning network selection, the
/// notification slot and both panels
pub struct AppState {
    // Network selection
    pub networks: NetworkConfig,
    pub network: Network,

    // Panels
    pub claim: ClaimPanel,
    pub balance: BalancePanel,

    // Toast
    pub notifications: NotificationSlot,

    // Wallet, as last read from the provider
    pub wallet_connected: bool,
    pub wallet_address: Option<String>,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub show_help: bool,

    // Display-only figures
    pub token_symbol: String,
    pub cooldown_hours: u32,
    pub max_claim: u32,

    next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let networks = config.network_config();
        let network = if networks.contains(config.default_network) {
            config.default_network
        } else {
            networks.networks().first().copied().unwrap_or_default()
        };

        AppState {
            networks,
            network,
            claim: ClaimPanel::new(),
            balance: BalancePanel::new(),
            notifications: NotificationSlot::new(NOTIFICATION_TTL),
            wallet_connected: false,
            wallet_address: None,
            active_panel: Panel::Claim,
            input_mode: InputMode::Normal,
            show_help: false,
            token_symbol: config.token_symbol.clone(),
            cooldown_hours: config.cooldown_hours,
            max_claim: config.max_claim,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// True while any panel has a request in flight
    pub fn is_busy(&self) -> bool {
        self.claim.is_loading() || self.balance.is_loading()
    }

    pub fn show_notification(&mut self, notification: Notification) {
        self.show_notification_at(notification, Instant::now());
    }

    pub fn show_notification_at(&mut self, notification: Notification, now: Instant) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "Notification");
        self.notifications.show(notification, now);
    }

    pub fn notification_deadline(&self) -> Option<Instant> {
        self.notifications.deadline()
    }

    pub fn expire_notification(&mut self, now: Instant) -> bool {
        self.notifications.expire(now)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            network: self.network,
            networks: self.networks.networks(),
            address: self.claim.address.clone(),
            cursor_position: self.claim.cursor_position,
            address_locked: self.claim.locked,
            wallet_connected: self.wallet_connected,
            wallet_address: self.wallet_address.clone(),
            claim_loading: self.claim.is_loading(),
            last_claim_message: self.claim.last_success.clone(),
            balance: self.balance.snapshot.clone(),
            balance_status: self.balance.status(),
            balance_loading: self.balance.is_loading(),
            notification: self.notifications.current().cloned(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            show_help: self.show_help,
            token_symbol: self.token_symbol.clone(),
            cooldown_hours: self.cooldown_hours,
            max_claim: self.max_claim,
        }
    }
}
