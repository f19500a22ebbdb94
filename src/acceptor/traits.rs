//! Trait abstraction for the form acceptor client to enable mocking in tests

use crate::state::ContactSubmission;
use async_trait::async_trait;

/// Result of one submit attempt. Produced exactly once per attempt and
/// drives exactly one presented status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The acceptor answered with a 2xx status
    Accepted,
    /// The acceptor answered but declined the submission
    Rejected { status: u16 },
    /// No response was obtained (connectivity/transport error)
    Failed { reason: String },
}

/// Trait for acceptor client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcceptorClientTrait: Send + Sync {
    /// Send one submission to the remote acceptor.
    ///
    /// All three resolution branches are data, not errors: a rejection or a
    /// transport failure is an expected outcome the UI must present.
    async fn submit(&self, submission: &ContactSubmission) -> SubmissionOutcome;
}
