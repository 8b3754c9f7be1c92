use crate::{
    Argument, Arity, Context, Error, FunctionDescriptor, RandSource, RandomFunction, Result,
    function::interface::arity_error,
};
use core::{fmt::Display, marker::PhantomData, num::ParseIntError, str::FromStr};
#[cfg(feature = "tracing")]
use tracing::instrument;

const INTEGER: FunctionDescriptor = FunctionDescriptor {
    key: "RandomInteger",
    arity: Arity::between(0, 2),
    usage: &[
        "Returns a random integer number, e.g. RandomInteger() or RandomInteger(max) or RandomInteger(min,max)",
        "RandomInteger()        - any 32-bit signed integer",
        "RandomInteger(max)     - an integer in [0, max)",
        "RandomInteger(min,max) - an integer in [min, max)",
    ],
};

const LONG: FunctionDescriptor = FunctionDescriptor {
    key: "RandomLong",
    arity: Arity::between(0, 2),
    usage: &[
        "Returns a random long number, e.g. RandomLong() or RandomLong(max) or RandomLong(min,max)",
        "RandomLong()        - any 64-bit signed integer",
        "RandomLong(max)     - a long in [0, max)",
        "RandomLong(min,max) - a long in [min, max)",
    ],
};

/// An integer width a [`RandomNumber`] can produce.
///
/// Each width carries its own descriptor, so `i32` is published as
/// `RandomInteger` and `i64` as `RandomLong`.
pub trait RangeInt: Copy + Display + FromStr<Err = ParseIntError> {
    const DESCRIPTOR: &'static FunctionDescriptor;
    const ZERO: Self;
}

impl RangeInt for i32 {
    const DESCRIPTOR: &'static FunctionDescriptor = &INTEGER;
    const ZERO: Self = 0;
}

impl RangeInt for i64 {
    const DESCRIPTOR: &'static FunctionDescriptor = &LONG;
    const ZERO: Self = 0;
}

/// Draws a uniformly random integer of width `N`.
///
/// - no arguments: any value of `N`, negatives included
/// - `(max)`: a value in `[0, max)`
/// - `(min, max)`: a value in `[min, max)`
///
/// Empty intervals are rejected with [`Error::InvalidRange`]; bounds are
/// never swapped.
///
/// # Example
/// ```
/// use ferrand::{Context, RandomFunction, RandomInteger, SharedRandom, arguments};
///
/// let integer = RandomInteger::new(SharedRandom::new());
/// let bound = integer.bind(arguments(["10", "20"])).unwrap();
/// let v: i32 = bound.evaluate(&Context::default()).unwrap().parse().unwrap();
/// assert!((10..20).contains(&v));
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumber<N, R> {
    rng: R,
    _width: PhantomData<fn() -> N>,
}

/// `RandomInteger`: 32-bit signed values.
pub type RandomInteger<R> = RandomNumber<i32, R>;

/// `RandomLong`: 64-bit signed values.
pub type RandomLong<R> = RandomNumber<i64, R>;

impl<N, R> RandomNumber<N, R>
where
    N: RangeInt,
    R: RandSource<N>,
{
    /// Creates a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            _width: PhantomData,
        }
    }
}

fn parse_bound<N: RangeInt>(arg: &Argument<'_>) -> Result<N> {
    let raw = arg.resolve()?;
    raw.trim().parse().map_err(|e| Error::parse(&raw, e))
}

impl<N, R> RandomFunction for RandomNumber<N, R>
where
    N: RangeInt,
    R: RandSource<N>,
{
    fn descriptor(&self) -> &'static FunctionDescriptor {
        N::DESCRIPTOR
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    fn execute(&self, args: &[Argument<'_>], _ctx: &Context) -> Result<String> {
        let value = match args {
            [] => self.rng.rand()?,
            [max] => {
                let max = parse_bound::<N>(max)?;
                self.rng.rand_range(N::ZERO..max)?
            }
            [min, max] => {
                let min = parse_bound::<N>(min)?;
                let max = parse_bound::<N>(max)?;
                self.rng.rand_range(min..max)?
            }
            _ => return Err(arity_error(N::DESCRIPTOR, args.len())),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(key = N::DESCRIPTOR.key, %value, "random number");
        Ok(value.to_string())
    }
}
