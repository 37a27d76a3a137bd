//! HTTP client wrapper - talks to the faucet backend and maps failures

use std::time::{Duration, Instant};

use crate::error::{FaucetError, FaucetResult};
use crate::messages::NetworkResponse;
use crate::models::{BalanceBody, ClaimRequest, MessageBody};

/// `POST {base_url}/claim`. `Ok` holds the server's message, if it sent one.
pub async fn claim(
    client: &reqwest::Client,
    base_url: &str,
    request: &ClaimRequest,
) -> FaucetResult<Option<String>> {
    let url = format!("{}/claim", base_url);
    let resp = client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(transport_error)?;
    let body = read_success_body(resp).await?;

    // A 2xx without a JSON body is still a successful claim
    let message = serde_json::from_str::<MessageBody>(&body)
        .ok()
        .and_then(|b| b.message);
    Ok(message)
}

/// `GET {base_url}/balance`. `Ok` holds the balance as sent by the backend.
pub async fn fetch_balance(client: &reqwest::Client, base_url: &str) -> FaucetResult<String> {
    let url = format!("{}/balance", base_url);
    let resp = client.get(&url).send().await.map_err(transport_error)?;
    let body = read_success_body(resp).await?;

    let parsed: BalanceBody = serde_json::from_str(&body)
        .map_err(|e| FaucetError::InvalidResponse(format!("balance body: {}", e)))?;
    let balance = parsed.balance.into_string();
    if balance.trim().is_empty() {
        return Err(FaucetError::InvalidResponse("empty balance".to_string()));
    }
    Ok(balance)
}

/// Execute a claim and wrap the outcome for the app layer
pub async fn execute_claim(
    client: &reqwest::Client,
    id: u64,
    base_url: String,
    request: ClaimRequest,
) -> NetworkResponse {
    let start = Instant::now();
    let result = claim(client, &base_url, &request).await;
    NetworkResponse::Claim {
        id,
        result,
        time_ms: start.elapsed().as_millis() as u64,
    }
}

/// Execute a balance check and wrap the outcome for the app layer
pub async fn execute_balance(client: &reqwest::Client, id: u64, base_url: String) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_balance(client, &base_url).await;
    NetworkResponse::Balance {
        id,
        result,
        time_ms: start.elapsed().as_millis() as u64,
    }
}

/// Read the body, turning non-2xx statuses into `FaucetError::Backend`
async fn read_success_body(resp: reqwest::Response) -> FaucetResult<String> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FaucetError::Transport(format!("Error reading body: {}", e)))?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<MessageBody>(&body)
        .ok()
        .and_then(|b| b.message);
    Err(FaucetError::Backend {
        status: status.as_u16(),
        message,
    })
}

fn transport_error(e: reqwest::Error) -> FaucetError {
    let msg = if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    };
    FaucetError::Transport(msg)
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
