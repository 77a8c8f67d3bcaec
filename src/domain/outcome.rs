//! Per-record sync outcomes
//!
//! Every sync attempt terminates by assigning one outcome to every channel
//! product in the batch. Callers inspect these after the call; the engine
//! never raises batch-internal failures.

/// Terminal state of one channel product after one sync attempt
///
/// Set exactly once per attempt; a later attempt overwrites the prior
/// outcome. Within a single call the whole batch receives either a uniform
/// failure or per-record successes, never a mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The product was created or updated; carries the remote product code
    Success(String),

    /// The sync attempt failed; carries the reason verbatim
    Failed(String),

    /// The product was deleted from the remote catalog
    DeleteSucceeded,
}

impl SyncOutcome {
    /// Whether this outcome represents a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, SyncOutcome::Failed(_))
    }

    /// The failure reason, if this outcome is a failure
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SyncOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason() {
        let outcome = SyncOutcome::Failed("connection refused".to_string());
        assert!(outcome.is_failure());
        assert_eq!(outcome.failure_reason(), Some("connection refused"));
    }

    #[test]
    fn test_success_is_not_failure() {
        assert!(!SyncOutcome::Success("A1".to_string()).is_failure());
        assert!(!SyncOutcome::DeleteSucceeded.is_failure());
        assert_eq!(SyncOutcome::DeleteSucceeded.failure_reason(), None);
    }
}
