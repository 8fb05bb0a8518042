//! Attempt hooks: side-effect-only callbacks, invoked inline by the attempt
//! loop. A hook cannot change the outcome of the call; a panicking hook
//! propagates to the caller and is not retried.

use std::sync::Arc;

use crate::options::ResolvedOptions;
use crate::types::Exchange;

/// Success callback. Receives the effective options, the accepted exchange,
/// and the number of attempts that failed before it (0 when the first try
/// succeeds).
pub type OnSuccess = Arc<dyn Fn(&ResolvedOptions, &Exchange, u32) + Send + Sync>;

/// Failure callback. Receives the effective options, the failed attempt, and
/// the 1-based attempt number. Invoked for every failed attempt, the
/// terminal one included.
pub type OnError = Arc<dyn Fn(&ResolvedOptions, AttemptFailure<'_>, u32) + Send + Sync>;

/// One failed attempt, as seen by [`OnError`].
#[derive(Clone, Copy, Debug)]
pub enum AttemptFailure<'a> {
    /// Completed exchange the retry policy refused to accept.
    Response(&'a Exchange),
    /// Transport-level failure, carrying no status code.
    Transport(&'a (dyn std::error::Error + 'static)),
}

impl AttemptFailure<'_> {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(exchange) => Some(exchange.status),
            Self::Transport(_) => None,
        }
    }
}

pub(crate) fn notify_success(options: &ResolvedOptions, exchange: &Exchange, prior_failures: u32) {
    if let Some(hook) = &options.on_success {
        hook(options, exchange, prior_failures);
    }
}

pub(crate) fn notify_failure(options: &ResolvedOptions, failure: AttemptFailure<'_>, attempt: u32) {
    if let Some(hook) = &options.on_error {
        hook(options, failure, attempt);
    }
}
