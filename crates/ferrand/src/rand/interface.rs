use crate::Result;
use core::ops::Range;

/// A trait for random sources that return uniformly distributed integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The integer type `T` is generic (typically `i32`, `i64` or `usize`).
///
/// # Example
/// ```
/// use core::ops::Range;
/// use ferrand::{RandSource, Result};
///
/// struct FixedRand;
/// impl RandSource<i64> for FixedRand {
///     fn rand(&self) -> Result<i64> {
///         Ok(1234)
///     }
///
///     fn rand_range(&self, range: Range<i64>) -> Result<i64> {
///         Ok(range.start)
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand().unwrap(), 1234);
/// assert_eq!(rng.rand_range(5..10).unwrap(), 5);
/// ```
pub trait RandSource<T> {
    /// Returns a value drawn uniformly from the whole domain of `T`.
    fn rand(&self) -> Result<T>;

    /// Returns a value drawn uniformly from the half-open `range`.
    ///
    /// # Errors
    /// - [`Error::InvalidRange`] if `range` is empty.
    ///
    /// [`Error::InvalidRange`]: crate::Error::InvalidRange
    fn rand_range(&self, range: Range<T>) -> Result<T>;
}
