//! App actor - message loop processing UI events and network responses

use std::time::Instant;

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::AppConfig;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::models::Notification;
use crate::wallet::WalletConnection;

/// App actor that processes UI events, network responses and
/// notification expiry
pub struct AppActor {
    state: AppState,
    wallet: Box<dyn WalletConnection>,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &AppConfig,
        wallet: Box<dyn WalletConnection>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let mut state = AppState::new(config);
        state.sync_wallet(wallet.is_connected(), wallet.address());
        AppActor {
            state,
            wallet,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            // Re-read every turn so a newer notification replaces the timer
            let deadline = self.state.notification_deadline();

            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                }
                response = net_rx.recv() => {
                    let Some(response) = response else { break };
                    self.state.handle_response(response);
                }
                _ = wait_until(deadline) => {
                    if !self.state.expire_notification(Instant::now()) {
                        continue;
                    }
                }
            }

            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::NextPanel => self.state.next_panel(),
            UiEvent::PrevPanel => self.state.prev_panel(),
            UiEvent::NextNetwork => self.state.next_network(),
            UiEvent::PrevNetwork => self.state.prev_network(),

            // Wallet
            UiEvent::ToggleWallet => self.toggle_wallet(),

            // Address editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),

            // Requests
            UiEvent::Claim => {
                if self.state.input_mode == InputMode::Editing {
                    self.state.stop_editing();
                }
                if let Some(cmd) = self.state.claim() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::CheckBalance => {
                if let Some(cmd) = self.state.check_balance() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    fn toggle_wallet(&mut self) {
        if self.wallet.is_connected() {
            self.wallet.disconnect();
            tracing::info!("Wallet disconnected");
        } else if let Err(e) = self.wallet.connect() {
            tracing::warn!(error = %e, "Wallet connection failed");
            self.state.show_notification(Notification::error(e.to_string()));
        } else {
            tracing::info!(address = ?self.wallet.address(), "Wallet connected");
        }
        self.state.sync_wallet(self.wallet.is_connected(), self.wallet.address());
    }
}

/// Resolve at `deadline`, or never when there is nothing to expire
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
