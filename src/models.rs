use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target blockchain environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Testnet,
    Devnet,
    Mainnet,
}

impl Network {
    /// Every network the front-end knows about, in selector order
    pub const ALL: [Network; 3] = [Network::Testnet, Network::Devnet, Network::Mainnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Mainnet => "mainnet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
            Network::Mainnet => "Mainnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "mainnet" => Ok(Network::Mainnet),
            _ => Err(ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Body of `POST {backend}/claim`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub address: String,
    pub network: Network,
}

/// Body of a `/claim` answer, success or failure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a successful `GET {backend}/balance`
#[derive(Clone, Debug, Deserialize)]
pub struct BalanceBody {
    pub balance: BalanceField,
}

/// Backends disagree on whether the balance is a string or a bare number
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum BalanceField {
    Text(String),
    Number(serde_json::Number),
}

impl BalanceField {
    pub fn into_string(self) -> String {
        match self {
            BalanceField::Text(s) => s,
            BalanceField::Number(n) => n.to_string(),
        }
    }
}

/// Notification kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown in the toast slot
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Qualitative health of the faucet reserve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    High,
    Medium,
    Low,
}

impl BalanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BalanceStatus::High => "Healthy",
            BalanceStatus::Medium => "Moderate",
            BalanceStatus::Low => "Low",
        }
    }
}

/// Last balance successfully read from a backend
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceSnapshot {
    pub value: String,
    pub network: Network,
    pub checked_at: DateTime<Utc>,
}
