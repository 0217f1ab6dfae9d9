#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::PreconditionViolation;

/// The result of a fallible computation: either a success payload or a
/// domain failure.
///
/// Exactly one variant is ever active, and no method mutates an outcome in
/// place. Comparisons look at the variant first, then the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub enum Outcome<S, E> {
    Success(S),
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts into the success payload, discarding a failure.
    #[must_use]
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure payload, discarding a success.
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `mapper` to the success payload, leaving a failure untouched.
    ///
    /// `mapper` is called exactly once on a success and never on a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let found: Outcome<&str, u16> = Outcome::Success("Success");
    /// assert_eq!(found.map(|_| "Foo"), Outcome::Success("Foo"));
    ///
    /// let missing: Outcome<&str, u16> = Outcome::Failure(404);
    /// assert_eq!(missing.map(str::len), Outcome::Failure(404));
    /// ```
    pub fn map<S2, F>(self, mapper: F) -> Outcome<S2, E>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapper(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `mapper` to the failure payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::{Outcome, Unit};
    ///
    /// let outcome: Outcome<Unit, &str> = Outcome::Failure("Oh no.");
    /// assert_eq!(outcome.map_error(str::len), Outcome::Failure(6));
    /// ```
    pub fn map_error<E2, F>(self, mapper: F) -> Outcome<S, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(mapper(error)),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`PreconditionViolation::UnwrapOnFailure`] if the outcome
    /// is a failure. Use [`Outcome::unwrap_or_else`] or [`Outcome::try_unwrap`]
    /// when that is an expected case.
    #[track_caller]
    pub fn unwrap(self) -> S {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns the success payload.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionViolation::UnwrapOnFailure`] if the outcome is a
    /// failure.
    pub fn try_unwrap(self) -> Result<S, PreconditionViolation> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(PreconditionViolation::UnwrapOnFailure),
        }
    }

    /// Returns the success payload, or `fallback` if the outcome is a failure.
    ///
    /// `fallback` is evaluated by the caller before the call, whichever
    /// variant is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::Success("Success").unwrap_or_else("Or"), "Success");
    /// assert_eq!(Outcome::<&str, i32>::Failure(10).unwrap_or_else("Or"), "Or");
    /// ```
    pub fn unwrap_or_else(self, fallback: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`PreconditionViolation::UnwrapFailureOnSuccess`] if the
    /// outcome is a success.
    #[track_caller]
    pub fn unwrap_failure(self) -> E {
        match self {
            Self::Success(_) => panic!("{}", PreconditionViolation::UnwrapFailureOnSuccess),
            Self::Failure(error) => error,
        }
    }

    /// Converts into a [`Result`], so `?` can carry a failure upward.
    ///
    /// # Errors
    ///
    /// A failure becomes `Err` with the same payload.
    pub fn into_result(self) -> Result<S, E> {
        self.into()
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
