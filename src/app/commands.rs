//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::MSG_CLAIM_FAILED;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Notification;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.input_mode = InputMode::Normal;
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.input_mode = InputMode::Normal;
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Network selection
    // ========================

    pub fn next_network(&mut self) {
        self.network = self.networks.next(self.network);
        tracing::info!(network = %self.network, "Network selected");
    }

    pub fn prev_network(&mut self) {
        self.network = self.networks.prev(self.network);
        tracing::info!(network = %self.network, "Network selected");
    }

    // ========================
    // Wallet
    // ========================

    /// Mirror the wallet provider's current account into the shell and
    /// the claim panel
    pub fn sync_wallet(&mut self, connected: bool, address: Option<&str>) {
        self.wallet_connected = connected;
        self.wallet_address = address.map(str::to_string);
        self.claim.sync_wallet(connected, address);
        if self.claim.locked && self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Address editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel == Panel::Claim && !self.claim.locked {
            self.input_mode = InputMode::Editing;
            self.claim.cursor_position = self.claim.address.len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.claim.set_address(value);
    }

    pub fn enter_char(&mut self, c: char) {
        self.claim.enter_char(c);
    }

    pub fn delete_char(&mut self) {
        self.claim.delete_char();
    }

    pub fn move_cursor_left(&mut self) {
        self.claim.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.claim.move_cursor_right();
    }

    // ========================
    // Requests
    // ========================

    /// Validate the address and build the claim command. Invalid input is
    /// reported as an error notification and nothing is sent.
    pub fn claim(&mut self) -> Option<NetworkCommand> {
        let request = match self.claim.validate(self.network) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!(error = %err, "Claim rejected locally");
                self.show_notification(Notification::error(err.user_message(MSG_CLAIM_FAILED)));
                return None;
            }
        };
        let base_url = self.backend_url()?;

        let id = self.next_id();
        self.claim.begin(id);
        tracing::info!(id, network = %request.network, "Submitting claim");

        Some(NetworkCommand::Claim { id, base_url, request })
    }

    pub fn check_balance(&mut self) -> Option<NetworkCommand> {
        let base_url = self.backend_url()?;

        let id = self.next_id();
        self.balance.begin(id, self.network);
        tracing::info!(id, network = %self.network, "Checking faucet balance");

        Some(NetworkCommand::CheckBalance { id, base_url })
    }

    fn backend_url(&self) -> Option<String> {
        match self.networks.resolve(self.network) {
            Ok(url) => Some(url.to_string()),
            Err(err) => {
                tracing::error!(error = %err, "No backend for selected network");
                None
            }
        }
    }

    // ========================
    // Response handling
    // ========================

    /// Route a network result to its panel; whatever resolves last owns
    /// the notification slot.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        let notification = match response {
            NetworkResponse::Claim { id, result, .. } => self.claim.complete(id, result),
            NetworkResponse::Balance { id, result, .. } => self.balance.complete(id, result),
        };
        if let Some(notification) = notification {
            self.show_notification(notification);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MSG_BALANCE_FAILED, MSG_BALANCE_SUCCESS, MSG_EMPTY_ADDRESS};
    use crate::error::FaucetError;
    use crate::models::{Network, NotificationKind};

    const ADDR: &str = "0xABC0000000000000000000000000000000000000000000000000000000000001";

    fn connected_state() -> AppState {
        let mut state = AppState::default();
        state.sync_wallet(true, Some(ADDR));
        state
    }

    fn claim_id(cmd: &NetworkCommand) -> u64 {
        match cmd {
            NetworkCommand::Claim { id, .. } => *id,
            other => panic!("expected claim, got {:?}", other),
        }
    }

    fn balance_id(cmd: &NetworkCommand) -> u64 {
        match cmd {
            NetworkCommand::CheckBalance { id, .. } => *id,
            other => panic!("expected balance check, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_address_sends_nothing() {
        let mut state = AppState::default();
        assert!(state.claim().is_none());
        assert!(!state.claim.is_loading());

        let note = state.notifications.current().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, MSG_EMPTY_ADDRESS);
    }

    #[test]
    fn test_short_address_sends_nothing() {
        let mut state = AppState::default();
        state.set_address("0x1234");
        assert!(state.claim().is_none());
        assert!(!state.is_busy());
        assert_eq!(state.notifications.current().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn test_valid_claim_issues_one_command_per_call() {
        let mut state = connected_state();

        let first = state.claim().unwrap();
        match &first {
            NetworkCommand::Claim { base_url, request, .. } => {
                assert_eq!(base_url, state.networks.resolve(Network::Testnet).unwrap());
                assert_eq!(request.address, ADDR);
                assert_eq!(request.network, Network::Testnet);
            }
            other => panic!("unexpected {:?}", other),
        }

        // Not locked out while loading; each call sends exactly once
        let second = state.claim().unwrap();
        assert_ne!(claim_id(&first), claim_id(&second));
        assert!(state.claim.is_loading());
        assert!(state.notifications.current().is_none());
    }

    #[test]
    fn test_claim_carries_selected_network() {
        let mut state = connected_state();
        state.next_network();
        assert_eq!(state.network, Network::Devnet);
        match state.claim().unwrap() {
            NetworkCommand::Claim { request, base_url, .. } => {
                assert_eq!(request.network, Network::Devnet);
                assert!(base_url.contains("devnet"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_claim_success_end_to_end() {
        let mut state = connected_state();
        let id = claim_id(&state.claim().unwrap());
        assert!(state.is_busy());

        state.handle_response(NetworkResponse::Claim {
            id,
            result: Ok(Some("Sent 10 SUI".to_string())),
            time_ms: 12,
        });

        assert!(!state.is_busy());
        let note = state.notifications.current().unwrap();
        assert_eq!(note, &Notification::success("Sent 10 SUI"));
        assert!(state.notification_deadline().is_some());
    }

    #[test]
    fn test_balance_503_keeps_previous_value() {
        let mut state = AppState::default();
        let id = balance_id(&state.check_balance().unwrap());
        state.handle_response(NetworkResponse::Balance { id, result: Ok("1500".to_string()), time_ms: 3 });
        assert_eq!(state.notifications.current().unwrap().message, MSG_BALANCE_SUCCESS);

        let id = balance_id(&state.check_balance().unwrap());
        state.handle_response(NetworkResponse::Balance {
            id,
            result: Err(FaucetError::Backend { status: 503, message: None }),
            time_ms: 3,
        });

        let note = state.notifications.current().unwrap();
        assert_eq!(note.kind, NotificationKind::Error);
        assert_eq!(note.message, MSG_BALANCE_FAILED);
        assert_eq!(state.balance.snapshot.as_ref().unwrap().value, "1500");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_last_resolution_wins_notification() {
        let mut state = connected_state();
        let claim = claim_id(&state.claim().unwrap());
        let balance = balance_id(&state.check_balance().unwrap());

        // Balance resolves first, claim last
        state.handle_response(NetworkResponse::Balance { id: balance, result: Ok("42".to_string()), time_ms: 1 });
        assert!(state.claim.is_loading());
        assert!(!state.balance.is_loading());
        state.handle_response(NetworkResponse::Claim {
            id: claim,
            result: Err(FaucetError::Backend { status: 429, message: Some("Slow down".to_string()) }),
            time_ms: 1,
        });
        assert_eq!(state.notifications.current().unwrap(), &Notification::error("Slow down"));

        // And the other way round
        let claim = claim_id(&state.claim().unwrap());
        let balance = balance_id(&state.check_balance().unwrap());
        state.handle_response(NetworkResponse::Claim { id: claim, result: Ok(None), time_ms: 1 });
        state.handle_response(NetworkResponse::Balance { id: balance, result: Ok("42".to_string()), time_ms: 1 });
        assert_eq!(state.notifications.current().unwrap().message, MSG_BALANCE_SUCCESS);
    }

    #[test]
    fn test_stray_response_ignored() {
        let mut state = AppState::default();
        state.handle_response(NetworkResponse::Claim { id: 41, result: Ok(None), time_ms: 0 });
        assert!(state.notifications.current().is_none());
    }

    #[test]
    fn test_editing_only_when_unlocked() {
        let mut state = AppState::default();
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Editing);
        state.enter_char('0');
        state.enter_char('x');
        assert_eq!(state.claim.address, "0x");

        // Connecting the wallet drops out of editing and locks the field
        state.sync_wallet(true, Some(ADDR));
        assert_eq!(state.input_mode, InputMode::Normal);
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.claim.address, ADDR);
    }

    #[test]
    fn test_start_editing_ignored_on_balance_panel() {
        let mut state = AppState::default();
        state.next_panel();
        assert_eq!(state.active_panel, Panel::Balance);
        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_network_cycle_stays_on_one_network() {
        let mut state = AppState::default();
        assert_eq!(state.network, Network::Testnet);
        state.prev_network();
        assert_eq!(state.network, Network::Devnet);
        state.next_network();
        assert_eq!(state.network, Network::Testnet);
    }
}
