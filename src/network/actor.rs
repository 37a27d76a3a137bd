//! Network actor - runs faucet HTTP calls in the Tokio runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_balance, execute_claim};

/// Network actor that processes claim and balance commands.
///
/// Every command runs as its own task, so a claim and a balance check
/// resolve independently of each other and of submission order.
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, timeout: Duration) -> Self {
        NetworkActor {
            client: create_client(timeout),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Claim { id, base_url, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %base_url, network = %request.network, "Executing claim");
                                let result = execute_claim(&client, id, base_url, request).await;
                                log_completion(&result);
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::CheckBalance { id, base_url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %base_url, "Executing balance check");
                                let result = execute_balance(&client, id, base_url).await;
                                log_completion(&result);
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // In-flight requests are not cancellable; drop them on exit
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

fn log_completion(response: &NetworkResponse) {
    let (id, time_ms) = match response {
        NetworkResponse::Claim { id, time_ms, .. } | NetworkResponse::Balance { id, time_ms, .. } => (*id, *time_ms),
    };
    if response.is_ok() {
        tracing::info!(id, time_ms, "Request completed");
    } else {
        tracing::warn!(id, time_ms, "Request failed");
    }
}
