/// One completed HTTP exchange, whatever the status code.
///
/// A non-2xx status is still an `Exchange`; network-level failures
/// (DNS, connection, timeout) surface as
/// [`TransportError`](crate::TransportError) instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub status: u16,
    pub body: String,
}

impl Exchange {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Value of a successful call: the body alone, or the whole exchange when
/// `resolve_with_full_response` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Body(String),
    Full(Exchange),
}

impl Reply {
    pub fn body(&self) -> &str {
        match self {
            Self::Body(body) => body,
            Self::Full(exchange) => &exchange.body,
        }
    }

    pub fn into_body(self) -> String {
        match self {
            Self::Body(body) => body,
            Self::Full(exchange) => exchange.body,
        }
    }

    /// Status code of the exchange, when the full response was kept.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Body(_) => None,
            Self::Full(exchange) => Some(exchange.status),
        }
    }
}
