//! `retry-get` is a retry-aware async HTTP GET client.
//!
//! One call drives up to `max` strictly sequential attempts through a
//! pluggable [`Transport`], classifies each completed exchange with the
//! built-in status policy or a caller-supplied [`RetryStrategy`], reports
//! every attempt to optional [`OnSuccess`]/[`OnError`] hooks, and projects
//! the accepted exchange into the shape the caller asked for:
//! - [`RetryGetClient::get`]
//! - [`RetryGetClient::get_with`]
//! - [`RetryGetClient::request`]
//!
//! Retries are issued back-to-back with no delay; backoff, timeouts and
//! cancellation belong to the transport, not to this crate.

mod client;
mod error;
mod hooks;
mod options;
mod policy;
mod transport;
mod types;

pub use client::RetryGetClient;
pub use error::RetryGetError;
pub use hooks::{AttemptFailure, OnError, OnSuccess};
pub use options::{GetOptions, ResolvedOptions, RetryStrategy};
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::{Exchange, Reply};

pub type Result<T> = std::result::Result<T, RetryGetError>;
