use std::fmt;
use std::sync::Arc;

use crate::error::RetryGetError;
use crate::hooks::{OnError, OnSuccess};
use crate::types::Exchange;
use crate::Result;

/// Retry predicate over one completed exchange. Returning `true` retries the
/// attempt (budget permitting); returning `false` accepts it as the call's
/// result. When configured it replaces the built-in status logic entirely.
pub type RetryStrategy = Arc<dyn Fn(&Exchange) -> bool + Send + Sync>;

/// Per-call or baseline options. Every field is optional: an absent field
/// falls back to the client's baseline, then to the hard default.
#[derive(Clone, Default)]
pub struct GetOptions {
    /// GET target, for requests described entirely by their options.
    pub url: Option<String>,
    /// Maximum attempts, the first one included. Must resolve to at least 1.
    /// Defaults to 1.
    pub max: Option<u32>,
    /// Retry any 5xx status on top of the default policy. Defaults to false.
    pub retry_on_5xx: Option<bool>,
    /// Simple mode: any non-2xx status is a failure. Defaults to true; when
    /// false a non-2xx exchange is handed back as a success.
    pub simple: Option<bool>,
    /// Resolve with the full exchange instead of the body alone. Defaults to
    /// false.
    pub resolve_with_full_response: Option<bool>,
    /// Custom retry predicate; overrides `simple`, `retry_on_5xx` and the
    /// status checks.
    pub retry_strategy: Option<RetryStrategy>,
    /// Called once, on the attempt that succeeds.
    pub on_success: Option<OnSuccess>,
    /// Called on every failed attempt, the terminal one included.
    pub on_error: Option<OnError>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `self` over `baseline`: any field present here wins, absent
    /// fields fall through. `baseline` is left untouched.
    pub(crate) fn merged_over(self, baseline: &GetOptions) -> GetOptions {
        GetOptions {
            url: self.url.or_else(|| baseline.url.clone()),
            max: self.max.or(baseline.max),
            retry_on_5xx: self.retry_on_5xx.or(baseline.retry_on_5xx),
            simple: self.simple.or(baseline.simple),
            resolve_with_full_response: self
                .resolve_with_full_response
                .or(baseline.resolve_with_full_response),
            retry_strategy: self.retry_strategy.or_else(|| baseline.retry_strategy.clone()),
            on_success: self.on_success.or_else(|| baseline.on_success.clone()),
            on_error: self.on_error.or_else(|| baseline.on_error.clone()),
        }
    }

    /// Resolves merged options into the target url plus one effective
    /// configuration, applying hard defaults and rejecting bad input before
    /// any network activity. A positional `url` wins over an embedded one.
    pub(crate) fn resolve(self, url: Option<&str>) -> Result<(String, ResolvedOptions)> {
        let url = match url {
            Some(url) => url.to_owned(),
            None => self.url.clone().unwrap_or_default(),
        };
        if url.trim().is_empty() {
            return Err(RetryGetError::Validation("url is required".to_owned()));
        }

        let max = self.max.unwrap_or(1);
        if max == 0 {
            return Err(RetryGetError::Validation(
                "max must be at least 1".to_owned(),
            ));
        }

        let options = ResolvedOptions {
            max,
            retry_on_5xx: self.retry_on_5xx.unwrap_or(false),
            simple: self.simple.unwrap_or(true),
            resolve_with_full_response: self.resolve_with_full_response.unwrap_or(false),
            retry_strategy: self.retry_strategy,
            on_success: self.on_success,
            on_error: self.on_error,
        };
        Ok((url, options))
    }
}

impl fmt::Debug for GetOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetOptions")
            .field("url", &self.url)
            .field("max", &self.max)
            .field("retry_on_5xx", &self.retry_on_5xx)
            .field("simple", &self.simple)
            .field("resolve_with_full_response", &self.resolve_with_full_response)
            .field("retry_strategy", &self.retry_strategy.as_ref().map(|_| "<fn>"))
            .field("on_success", &self.on_success.as_ref().map(|_| "<fn>"))
            .field("on_error", &self.on_error.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The effective configuration for one call, every default applied. This is
/// what hooks and the transport see.
#[derive(Clone)]
pub struct ResolvedOptions {
    pub max: u32,
    pub retry_on_5xx: bool,
    pub simple: bool,
    pub resolve_with_full_response: bool,
    pub retry_strategy: Option<RetryStrategy>,
    pub on_success: Option<OnSuccess>,
    pub on_error: Option<OnError>,
}

impl fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("max", &self.max)
            .field("retry_on_5xx", &self.retry_on_5xx)
            .field("simple", &self.simple)
            .field("resolve_with_full_response", &self.resolve_with_full_response)
            .field("retry_strategy", &self.retry_strategy.as_ref().map(|_| "<fn>"))
            .field("on_success", &self.on_success.as_ref().map(|_| "<fn>"))
            .field("on_error", &self.on_error.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
