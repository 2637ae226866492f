//! Reachability check for the hosted webchat.
//!
//! A single GET with a short timeout. Only HTTP 200 counts as connected;
//! every other outcome is reported but the page collapses it to "not connected".

use serde::Serialize;
use std::time::Duration;

/// Result of one probe against the configured URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Connected,
    Timeout,
    ConnectionError { detail: String },
    UnexpectedStatus { code: u16 },
}

impl ProbeOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Short label for logs and the JSON status endpoint.
    pub fn label(&self) -> String {
        match self {
            Self::Connected => "connected".to_string(),
            Self::Timeout => "timeout".to_string(),
            Self::ConnectionError { detail } => format!("connection error: {}", detail),
            Self::UnexpectedStatus { code } => format!("status {}", code),
        }
    }
}

/// Issue one GET against `url`. No retries.
pub async fn probe(client: &reqwest::Client, url: &str, timeout: Duration) -> ProbeOutcome {
    let result = client.get(url).timeout(timeout).send().await;

    match result {
        Ok(resp) => {
            let code = resp.status().as_u16();
            if code == 200 {
                ProbeOutcome::Connected
            } else {
                ProbeOutcome::UnexpectedStatus { code }
            }
        }
        Err(e) if e.is_timeout() => ProbeOutcome::Timeout,
        Err(e) => ProbeOutcome::ConnectionError {
            detail: e.to_string(),
        },
    }
}

/// Collapsed form of [`probe`]: true only on HTTP 200.
pub async fn check_connection(client: &reqwest::Client, url: &str, timeout: Duration) -> bool {
    probe(client, url, timeout).await.is_connected()
}
