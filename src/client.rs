use std::fmt;
use std::sync::Arc;

use crate::{
    error::RetryGetError,
    hooks::{self, AttemptFailure},
    options::{GetOptions, ResolvedOptions},
    policy::{classify, Verdict},
    transport::{HttpTransport, Transport},
    types::{Exchange, Reply},
    Result,
};

/// Retrying GET client bound to a baseline set of options.
///
/// The client is an immutable value: rebinding defaults produces a new
/// client, and concurrent calls share no mutable state.
#[derive(Clone)]
pub struct RetryGetClient {
    transport: Arc<dyn Transport>,
    baseline: GetOptions,
}

impl fmt::Debug for RetryGetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryGetClient")
            .field("baseline", &self.baseline)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl Default for RetryGetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryGetClient {
    /// Creates a client over the production HTTP transport with an empty
    /// baseline.
    pub fn new() -> Self {
        Self::with_defaults(GetOptions::default())
    }

    /// Creates a client whose every call starts from `baseline`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retry_get::{GetOptions, RetryGetClient};
    ///
    /// # async fn run() -> retry_get::Result<()> {
    /// let client = RetryGetClient::with_defaults(GetOptions {
    ///     max: Some(3),
    ///     retry_on_5xx: Some(true),
    ///     ..GetOptions::default()
    /// });
    /// let reply = client.get("https://example.com").await?;
    /// println!("{}", reply.body());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(baseline: GetOptions) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            baseline,
        }
    }

    /// Creates a client over a custom transport with an empty baseline.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            baseline: GetOptions::default(),
        }
    }

    /// Rebinds the baseline options, leaving `self` untouched. Calls made
    /// through the returned client merge their per-call options over
    /// `baseline`.
    pub fn defaults(&self, baseline: GetOptions) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            baseline,
        }
    }

    /// GETs `url` with the client's baseline options.
    pub async fn get(&self, url: impl AsRef<str>) -> Result<Reply> {
        self.run(Some(url.as_ref()), GetOptions::default()).await
    }

    /// GETs `url`, with `options` overriding the baseline field by field for
    /// this call only.
    pub async fn get_with(&self, url: impl AsRef<str>, options: GetOptions) -> Result<Reply> {
        self.run(Some(url.as_ref()), options).await
    }

    /// Issues a request described entirely by `options`, url included.
    pub async fn request(&self, options: GetOptions) -> Result<Reply> {
        self.run(None, options).await
    }

    /// Drives attempts `1..=max`, strictly sequential, stopping at the first
    /// accepted exchange or at exhaustion. Options are resolved and
    /// validated before the first transport call.
    async fn run(&self, url: Option<&str>, options: GetOptions) -> Result<Reply> {
        let (url, options) = options.merged_over(&self.baseline).resolve(url)?;

        let mut attempt = 1u32;
        loop {
            match self.transport.get(&url, &options).await {
                Ok(exchange) => {
                    let verdict = classify(&exchange, &options);
                    if verdict == Verdict::Accept {
                        hooks::notify_success(&options, &exchange, attempt - 1);
                        return Ok(project(exchange, &options));
                    }

                    hooks::notify_failure(&options, AttemptFailure::Response(&exchange), attempt);
                    // A terminal verdict ends the call even with budget left.
                    if verdict == Verdict::Fail || attempt == options.max {
                        return Err(final_status_error(exchange, &options));
                    }

                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        "retrying after status {} (attempt {} of {})",
                        exchange.status,
                        attempt,
                        options.max
                    );
                    attempt += 1;
                }
                Err(err) => {
                    hooks::notify_failure(&options, AttemptFailure::Transport(err.as_ref()), attempt);
                    if attempt == options.max {
                        // Surface the transport's own error, unwrapped.
                        return Err(RetryGetError::Transport(err));
                    }

                    #[cfg(feature = "tracing")]
                    tracing::debug!("retrying after transport error (attempt {} of {})", attempt, options.max);
                    attempt += 1;
                }
            }
        }
    }
}

fn project(exchange: Exchange, options: &ResolvedOptions) -> Reply {
    if options.resolve_with_full_response {
        Reply::Full(exchange)
    } else {
        Reply::Body(exchange.body)
    }
}

fn final_status_error(exchange: Exchange, options: &ResolvedOptions) -> RetryGetError {
    if options.retry_strategy.is_some() {
        RetryGetError::Exhausted { exchange }
    } else {
        RetryGetError::Status { exchange }
    }
}

#[cfg(test)]
mod tests {
    use super::{final_status_error, project};
    use crate::{Exchange, GetOptions, Reply, RetryGetError};

    fn resolved(options: GetOptions) -> crate::ResolvedOptions {
        options
            .resolve(Some("www.google.com"))
            .expect("options must resolve")
            .1
    }

    #[test]
    fn projects_the_body_by_default() {
        let options = resolved(GetOptions::default());
        let reply = project(Exchange::new(200, "body"), &options);
        assert_eq!(reply, Reply::Body("body".to_owned()));
        assert_eq!(reply.status(), None);
    }

    #[test]
    fn projects_the_full_exchange_on_request() {
        let options = resolved(GetOptions {
            resolve_with_full_response: Some(true),
            ..GetOptions::default()
        });
        let reply = project(Exchange::new(200, "body"), &options);
        assert_eq!(reply, Reply::Full(Exchange::new(200, "body")));
        assert_eq!(reply.status(), Some(200));
        assert_eq!(reply.body(), "body");
    }

    #[test]
    fn strategy_driven_failures_classify_as_exhausted() {
        let options = resolved(GetOptions {
            retry_strategy: Some(std::sync::Arc::new(|_: &Exchange| true)),
            ..GetOptions::default()
        });
        let err = final_status_error(Exchange::new(401, "denied"), &options);
        assert!(matches!(err, RetryGetError::Exhausted { .. }));

        let err = final_status_error(Exchange::new(401, "denied"), &resolved(GetOptions::default()));
        assert!(matches!(err, RetryGetError::Status { .. }));
    }
}
