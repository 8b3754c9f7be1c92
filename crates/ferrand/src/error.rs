/// A result type defaulting to the crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `ferrand` can emit.
///
/// Every variant is reported to the caller unchanged. No function substitutes
/// a default value for a failed argument, so a misconfigured script fails
/// loudly instead of producing plausible-looking test data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The function was given a number of arguments outside its declared
    /// bounds. Detected at bind time, before any argument is resolved.
    #[error("{key} expects {} argument(s), got {count}", expected(.min, .max))]
    Arity {
        key: &'static str,
        count: usize,
        min: usize,
        max: Option<usize>,
    },

    /// A numeric argument did not parse as an integer of the function's
    /// width.
    #[error("invalid integer {value:?}: {reason}")]
    Parse { value: String, reason: String },

    /// A date argument did not match the expected calendar format.
    #[error("invalid date {value:?}, expected format {expected}")]
    DateParse {
        value: String,
        expected: &'static str,
    },

    /// The requested half-open interval `[low, high)` is empty.
    ///
    /// Bounds are never swapped; `low >= high` is a caller error.
    #[error("empty range: [{low}, {high})")]
    InvalidRange { low: String, high: String },

    /// A value is valid but the resulting timestamp or window cannot be
    /// represented.
    #[error("value out of range: {value}")]
    OutOfRange { value: String },

    /// A lazy argument failed to resolve. The message is passed through as
    /// reported by the argument.
    #[error("argument evaluation failed: {0}")]
    Evaluation(String),

    /// No function is registered under the given key.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    /// A function with the same key is already registered.
    #[error("function {0:?} is already registered")]
    DuplicateKey(&'static str),

    /// The shared random source's lock was poisoned by a panicking thread.
    ///
    /// When the `parking-lot` feature is enabled, mutexes do **not** poison,
    /// so this variant is not available.
    #[cfg(not(feature = "parking-lot"))]
    #[error("random source lock poisoned")]
    LockPoisoned,
}

fn expected(min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) if max == min => format!("{min}"),
        Some(max) => format!("{min}..={max}"),
        None => format!("at least {min}"),
    }
}

impl Error {
    pub(crate) fn parse(value: &str, err: impl core::fmt::Display) -> Self {
        Self::Parse {
            value: value.to_owned(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn invalid_range(low: impl ToString, high: impl ToString) -> Self {
        Self::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}

#[cfg(not(feature = "parking-lot"))]
use crate::rand::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_names_bounds() {
        let err = Error::Arity {
            key: "RandomChoice",
            count: 1,
            min: 2,
            max: None,
        };
        assert_eq!(
            err.to_string(),
            "RandomChoice expects at least 2 argument(s), got 1"
        );

        let err = Error::Arity {
            key: "RandomInteger",
            count: 3,
            min: 0,
            max: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "RandomInteger expects 0..=2 argument(s), got 3"
        );
    }

    #[test]
    fn date_parse_message_carries_value_and_format() {
        let err = Error::DateParse {
            value: "not-a-date".into(),
            expected: "%Y-%m-%d",
        };
        let msg = err.to_string();
        assert!(msg.contains("not-a-date"));
        assert!(msg.contains("%Y-%m-%d"));
    }
}
