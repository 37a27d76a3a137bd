//! Error types surfaced by the faucet front-end

use thiserror::Error;

use crate::models::Network;

/// Outcome of a failed claim or balance check.
///
/// Every variant ends up as a transient error notification; none of them
/// stops the application.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FaucetError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// The backend could not be reached or the body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}{}", message_suffix(.message))]
    Backend { status: u16, message: Option<String> },

    /// 2xx answer whose body did not match the contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FaucetError {
    /// Text to show the user, falling back to `default` when the error
    /// carries nothing worth showing verbatim.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            FaucetError::Validation(msg) => msg.clone(),
            FaucetError::Backend { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            FaucetError::Backend { .. }
            | FaucetError::Transport(_)
            | FaucetError::InvalidResponse(_) => default.to_string(),
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Configuration errors. These point at a broken config file or a
/// programming mistake and are logged rather than shown as notifications.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Network '{0}' is not configured")]
    UnknownNetwork(Network),

    #[error("Unknown network identifier: {0}")]
    InvalidNetwork(String),

    #[error("No networks configured")]
    NoNetworks,

    #[error("Invalid backend URL for {network}: '{url}'")]
    InvalidBackendUrl { network: Network, url: String },

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Wallet provider errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("No wallet account available")]
    NoAccount,
}

pub type FaucetResult<T> = Result<T, FaucetError>;

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Something went wrong";

    #[test]
    fn test_backend_message_shown_verbatim() {
        let err = FaucetError::Backend {
            status: 429,
            message: Some("Rate limited, come back tomorrow".to_string()),
        };
        assert_eq!(err.user_message(FALLBACK), "Rate limited, come back tomorrow");
    }

    #[test]
    fn test_backend_without_message_falls_back() {
        let err = FaucetError::Backend { status: 503, message: None };
        assert_eq!(err.user_message(FALLBACK), FALLBACK);

        let blank = FaucetError::Backend { status: 500, message: Some("  ".to_string()) };
        assert_eq!(blank.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_transport_and_invalid_response_use_fallback() {
        let err = FaucetError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(FALLBACK), FALLBACK);

        let err = FaucetError::InvalidResponse("missing balance".to_string());
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn test_validation_message_is_kept() {
        let err = FaucetError::Validation("Please enter a wallet address".to_string());
        assert_eq!(err.user_message(FALLBACK), "Please enter a wallet address");
    }

    #[test]
    fn test_backend_display() {
        let err = FaucetError::Backend { status: 400, message: Some("bad address".to_string()) };
        assert_eq!(err.to_string(), "Backend returned 400: bad address");
        let err = FaucetError::Backend { status: 503, message: None };
        assert_eq!(err.to_string(), "Backend returned 503");
    }
}
