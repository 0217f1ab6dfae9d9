use thiserror::Error;

/// Misuse of an [`Outcome`](crate::Outcome) extractor.
///
/// These are programmer errors, not domain failures: they are raised when a
/// payload is pulled out of the wrong variant without checking the tag first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PreconditionViolation {
    #[error("unable to retrieve the success value as the outcome is in an erroneous state")]
    UnwrapOnFailure,

    #[error("unable to retrieve the failure value as the outcome is in a successful state")]
    UnwrapFailureOnSuccess,
}
