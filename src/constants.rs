//! Application constants
//!
//! Centralized location for user-facing strings and configuration defaults.

use std::time::Duration;

/// Default backend for the testnet faucet
pub const DEFAULT_TESTNET_URL: &str = "https://your-testnet-backend.com/api";

/// Default backend for the devnet faucet
pub const DEFAULT_DEVNET_URL: &str = "https://your-devnet-backend.com/api";

/// Shortest address the claim panel will submit
pub const MIN_ADDRESS_LEN: usize = 40;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Default HTTP timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_TOKEN_SYMBOL: &str = "SUI";
pub const DEFAULT_COOLDOWN_HOURS: u32 = 24;
pub const DEFAULT_MAX_CLAIM: u32 = 10;

// Notification texts
pub const MSG_EMPTY_ADDRESS: &str = "Please enter a wallet address";
pub const MSG_CLAIM_SUCCESS: &str = "Tokens claimed successfully!";
pub const MSG_CLAIM_FAILED: &str = "Failed to claim tokens. Please try again.";
pub const MSG_BALANCE_SUCCESS: &str = "Faucet balance updated successfully!";
pub const MSG_BALANCE_FAILED: &str = "Failed to check balance. Please try again.";

/// Application name
pub const APP_NAME: &str = "Token Bank";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written next to the working directory
pub const LOG_FILE: &str = "tokenbank.log";
