use crate::{Error, RandSource, Result};
use core::ops::Range;
use rand::{Rng, rng};

/// A `RandSource` backed by the thread-local RNG (`rand::rng()`).
///
/// Every worker thread draws from its own generator, so there is no lock and
/// no contention. The type is zero-sized and holds no RNG state; each call
/// fetches the calling thread's generator. Draws never fail.
///
/// Prefer [`SharedRandom`] when all functions must consume one stream (for
/// instance, to replay a run from a fixed seed).
///
/// [`SharedRandom`]: crate::SharedRandom
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

macro_rules! impl_thread_random {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RandSource<$ty> for ThreadRandom {
                fn rand(&self) -> Result<$ty> {
                    Ok(rng().random())
                }

                fn rand_range(&self, range: Range<$ty>) -> Result<$ty> {
                    if range.is_empty() {
                        return Err(Error::invalid_range(range.start, range.end));
                    }
                    Ok(rng().random_range(range))
                }
            }
        )*
    };
}

impl_thread_random!(i32, i64, u64);

// `StandardUniform` has no `usize` impl; full-width draws go through `u64`.
impl RandSource<usize> for ThreadRandom {
    fn rand(&self) -> Result<usize> {
        Ok(rng().random::<u64>() as usize)
    }

    fn rand_range(&self, range: Range<usize>) -> Result<usize> {
        if range.is_empty() {
            return Err(Error::invalid_range(range.start, range.end));
        }
        Ok(rng().random_range(range))
    }
}
