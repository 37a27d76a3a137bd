//! Network messages - communication between App and Network layers

use crate::error::FaucetResult;
use crate::models::ClaimRequest;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// `POST {base_url}/claim`
    Claim {
        id: u64,
        base_url: String,
        request: ClaimRequest,
    },
    /// `GET {base_url}/balance`
    CheckBalance {
        id: u64,
        base_url: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Claim settled; `Ok` carries the server's message, if any
    Claim {
        id: u64,
        result: FaucetResult<Option<String>>,
        time_ms: u64,
    },
    /// Balance check settled; `Ok` carries the balance string
    Balance {
        id: u64,
        result: FaucetResult<String>,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Claim { id, .. } => *id,
            NetworkResponse::Balance { id, .. } => *id,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            NetworkResponse::Claim { result, .. } => result.is_ok(),
            NetworkResponse::Balance { result, .. } => result.is_ok(),
        }
    }
}
