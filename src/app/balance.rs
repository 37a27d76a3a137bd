//! Balance panel - faucet reserve lookup, formatting and classification

use std::collections::BTreeMap;

use chrono::Utc;

use crate::constants::{MSG_BALANCE_FAILED, MSG_BALANCE_SUCCESS};
use crate::error::FaucetResult;
use crate::models::{BalanceSnapshot, BalanceStatus, Network, Notification};

/// Balance panel state
#[derive(Clone, Debug, Default)]
pub struct BalancePanel {
    pub snapshot: Option<BalanceSnapshot>,
    /// In-flight request ids and the network each was sent to
    pending: BTreeMap<u64, Network>,
}

impl BalancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn begin(&mut self, id: u64, network: Network) {
        self.pending.insert(id, network);
    }

    /// Settle request `id`. A failure leaves the previous snapshot in place.
    pub fn complete(&mut self, id: u64, result: FaucetResult<String>) -> Option<Notification> {
        let network = self.pending.remove(&id)?;
        match result {
            Ok(value) => {
                tracing::debug!(id, %network, balance = %value, "Balance updated");
                self.snapshot = Some(BalanceSnapshot {
                    value,
                    network,
                    checked_at: Utc::now(),
                });
                Some(Notification::success(MSG_BALANCE_SUCCESS))
            }
            Err(err) => {
                tracing::warn!(id, %network, error = %err, "Balance check failed");
                Some(Notification::error(err.user_message(MSG_BALANCE_FAILED)))
            }
        }
    }

    pub fn status(&self) -> Option<BalanceStatus> {
        self.snapshot.as_ref().map(|s| classify(&s.value))
    }
}

/// Human-readable balance: `2.50M`, `1.50K`, or grouped with up to four
/// fractional digits below a thousand. Non-numeric input comes back as is.
pub fn format_balance(value: &str) -> String {
    let Ok(num) = value.trim().parse::<f64>() else {
        return value.to_string();
    };
    if !num.is_finite() {
        return value.to_string();
    }

    if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        group_thousands(num)
    }
}

/// Reserve health: above 1000 is healthy, above 100 moderate, the rest low
pub fn classify(value: &str) -> BalanceStatus {
    match value.trim().parse::<f64>() {
        Ok(num) if num > 1000.0 => BalanceStatus::High,
        Ok(num) if num > 100.0 => BalanceStatus::Medium,
        _ => BalanceStatus::Low,
    }
}

fn group_thousands(num: f64) -> String {
    let fixed = format!("{:.4}", num.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let negative = num < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
