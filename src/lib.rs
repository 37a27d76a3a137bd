//! # Token Bank TUI
//!
//! A terminal front-end for a test-token faucet.
//!
//! ## Features
//! - Network selection (testnet, devnet, optional mainnet)
//! - Wallet connection with address lock-in
//! - Token claims with local address validation
//! - Faucet reserve lookup with K/M formatting and health badge
//! - Auto-expiring toast notifications
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;
pub mod wallet;

// Re-export commonly used types
pub use models::{ClaimRequest, Network, Notification, NotificationKind, BalanceStatus};
pub use config::{AppConfig, NetworkConfig};
pub use error::{FaucetError, ConfigError, WalletError};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, classify, format_balance};
pub use network::NetworkActor;
pub use wallet::{ConfiguredWallet, WalletConnection};
