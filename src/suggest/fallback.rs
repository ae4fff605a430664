//! Ordered attempt list with per-attempt error capture.
//!
//! Generic building block for multi-provider integrations: try a fixed
//! list of candidate identifiers in order, return the first success, and
//! keep every failure reason alongside its identifier for observability.
//! Nothing here retries a candidate - one attempt each, in list order.

use std::fmt::Display;

/// A failed attempt, recorded with the candidate it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    /// Identifier of the candidate that failed (e.g. a model name).
    pub candidate: String,
    /// Human-readable failure reason.
    pub reason: String,
}

impl Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.candidate, self.reason)
    }
}

/// Run `attempt` against each candidate in order, short-circuiting on the
/// first success.
///
/// Returns the first `Ok` value (if any) together with the failures
/// accumulated on the way there. When every candidate fails, the result is
/// `(None, all failures)` - exhaustion is not an error here; the caller
/// decides what it means.
pub fn first_success<T, E, F>(candidates: &[&str], mut attempt: F) -> (Option<T>, Vec<AttemptFailure>)
where
    E: Display,
    F: FnMut(&str) -> Result<T, E>,
{
    let mut failures = Vec::new();
    for candidate in candidates {
        match attempt(candidate) {
            Ok(value) => return (Some(value), failures),
            Err(err) => failures.push(AttemptFailure {
                candidate: (*candidate).to_string(),
                reason: err.to_string(),
            }),
        }
    }
    (None, failures)
}
