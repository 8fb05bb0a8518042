use async_trait::async_trait;

use crate::options::ResolvedOptions;
use crate::types::Exchange;

/// Error raised by the transport itself: DNS, connection, timeout. Carries
/// no status code. A completed exchange with any status is never a
/// transport error.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// The single-call GET collaborator the retry engine drives.
///
/// One invocation performs exactly one GET. The retry engine owns attempt
/// sequencing; a transport must not retry on its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one GET against `url`, resolving with the completed exchange
    /// for any HTTP status, or failing with a transport-level error.
    async fn get(
        &self,
        url: &str,
        options: &ResolvedOptions,
    ) -> std::result::Result<Exchange, TransportError>;
}

/// Production transport over [`reqwest::Client`].
///
/// Timeouts and TLS policy belong here, not in the retry engine: configure
/// them on the client handed to [`HttpTransport::with_client`].
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        _options: &ResolvedOptions,
    ) -> std::result::Result<Exchange, TransportError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| Box::new(err) as TransportError)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| Box::new(err) as TransportError)?;

        Ok(Exchange { status, body })
    }
}
