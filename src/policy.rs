use crate::options::ResolvedOptions;
use crate::types::Exchange;

/// What to do with one completed exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Hand the exchange to the caller as the result.
    Accept,
    /// Try again, budget permitting.
    Retry,
    /// Fail now, even with attempts left.
    Fail,
}

/// Classifies one completed exchange. Pure and deterministic; transport
/// errors never reach here (the attempt loop retries them while budget
/// remains and surfaces them verbatim once it runs out).
///
/// A configured retry strategy owns the decision outright, status checks
/// included. Otherwise: 2xx is accepted, 5xx retries when `retry_on_5xx` is
/// set, and any other status fails terminally in simple mode or is accepted
/// in non-simple mode.
pub(crate) fn classify(exchange: &Exchange, options: &ResolvedOptions) -> Verdict {
    if let Some(strategy) = &options.retry_strategy {
        return if strategy(exchange) {
            Verdict::Retry
        } else {
            Verdict::Accept
        };
    }

    match exchange.status {
        200..=299 => Verdict::Accept,
        500..=599 if options.retry_on_5xx => Verdict::Retry,
        _ if options.simple => Verdict::Fail,
        _ => Verdict::Accept,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn options() -> ResolvedOptions {
        ResolvedOptions {
            max: 1,
            retry_on_5xx: false,
            simple: true,
            resolve_with_full_response: false,
            retry_strategy: None,
            on_success: None,
            on_error: None,
        }
    }

    #[test]
    fn accepts_2xx() {
        assert_eq!(classify(&Exchange::new(200, ""), &options()), Verdict::Accept);
        assert_eq!(classify(&Exchange::new(204, ""), &options()), Verdict::Accept);
        assert_eq!(classify(&Exchange::new(299, ""), &options()), Verdict::Accept);
    }

    #[test]
    fn simple_mode_fails_non_2xx_terminally() {
        assert_eq!(classify(&Exchange::new(404, ""), &options()), Verdict::Fail);
        assert_eq!(classify(&Exchange::new(500, ""), &options()), Verdict::Fail);
        assert_eq!(classify(&Exchange::new(301, ""), &options()), Verdict::Fail);
    }

    #[test]
    fn retry_on_5xx_retries_only_5xx() {
        let opts = ResolvedOptions {
            retry_on_5xx: true,
            ..options()
        };
        assert_eq!(classify(&Exchange::new(500, ""), &opts), Verdict::Retry);
        assert_eq!(classify(&Exchange::new(599, ""), &opts), Verdict::Retry);
        // 4xx stays terminal even with the 5xx knob on.
        assert_eq!(classify(&Exchange::new(401, ""), &opts), Verdict::Fail);
    }

    #[test]
    fn non_simple_mode_accepts_non_2xx() {
        let opts = ResolvedOptions {
            simple: false,
            ..options()
        };
        assert_eq!(classify(&Exchange::new(401, ""), &opts), Verdict::Accept);
        assert_eq!(classify(&Exchange::new(500, ""), &opts), Verdict::Accept);
    }

    #[test]
    fn non_simple_mode_still_retries_5xx_when_asked() {
        let opts = ResolvedOptions {
            simple: false,
            retry_on_5xx: true,
            ..options()
        };
        assert_eq!(classify(&Exchange::new(500, ""), &opts), Verdict::Retry);
        assert_eq!(classify(&Exchange::new(401, ""), &opts), Verdict::Accept);
    }

    #[test]
    fn strategy_owns_the_decision() {
        let opts = ResolvedOptions {
            retry_strategy: Some(Arc::new(|exchange: &Exchange| exchange.status == 401)),
            ..options()
        };
        assert_eq!(classify(&Exchange::new(401, ""), &opts), Verdict::Retry);
        // Strategy said no: a 500 is accepted even in simple mode.
        assert_eq!(classify(&Exchange::new(500, ""), &opts), Verdict::Accept);
    }

    #[test]
    fn strategy_overrides_status_checks_even_for_2xx() {
        let opts = ResolvedOptions {
            retry_strategy: Some(Arc::new(|_: &Exchange| true)),
            ..options()
        };
        assert_eq!(classify(&Exchange::new(200, ""), &opts), Verdict::Retry);
    }

    #[test]
    fn classification_is_deterministic() {
        let opts = ResolvedOptions {
            retry_on_5xx: true,
            ..options()
        };
        let exchange = Exchange::new(503, "busy");
        assert_eq!(classify(&exchange, &opts), classify(&exchange, &opts));
    }
}
