use crate::transport::TransportError;
use crate::types::Exchange;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RetryGetError {
    /// Bad options, rejected before any transport activity.
    #[error("{0}")]
    Validation(String),
    /// Network-level failure from the transport, surfaced after retries are
    /// spent. The boxed error is the transport's own, unwrapped.
    #[error("transport error: {0}")]
    Transport(TransportError),
    /// Non-2xx response once the default status policy gave out.
    #[error("{}", status_line(.exchange))]
    Status { exchange: Exchange },
    /// Non-2xx response once a caller-supplied retry strategy gave out.
    #[error("retries exhausted: {}", status_line(.exchange))]
    Exhausted { exchange: Exchange },
}

impl RetryGetError {
    /// Final exchange behind a status-derived failure, when there is one.
    pub fn exchange(&self) -> Option<&Exchange> {
        match self {
            Self::Status { exchange } | Self::Exhausted { exchange } => Some(exchange),
            Self::Validation(_) | Self::Transport(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.exchange().map(|exchange| exchange.status)
    }
}

// `<status> - "<JSON-encoded body>"`, e.g. `500 - ""body""`.
fn status_line(exchange: &Exchange) -> String {
    let body = serde_json::Value::String(exchange.body.clone());
    format!("{} - \"{}\"", exchange.status, body)
}
