use crate::{Error, Mutex, RandSource, Result};
use core::ops::Range;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A process-wide uniform random source shared by every function instance.
///
/// The generator state lives behind an [`Arc<Mutex<_>>`]; cloning a
/// `SharedRandom` yields another handle to the **same** state, so every
/// function built from clones of one source draws from a single stream.
///
/// ## Features
///
/// - ✅ Thread-safe
/// - ✅ Unbiased integer sampling over any half-open range
/// - ❌ Not reproducible across runs unless built with [`Self::from_seed`]
///
/// ## See Also
/// - [`ThreadRandom`]
///
/// [`ThreadRandom`]: crate::ThreadRandom
#[derive(Clone, Debug)]
pub struct SharedRandom {
    state: Arc<Mutex<StdRng>>,
}

impl Default for SharedRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedRandom {
    /// Creates a new source seeded once from the current wall-clock time.
    ///
    /// # Example
    /// ```
    /// use ferrand::{RandSource, SharedRandom};
    ///
    /// let rng = SharedRandom::new();
    /// let v: i64 = rng.rand_range(0..10).unwrap();
    /// assert!((0..10).contains(&v));
    /// ```
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    /// Creates a new source from a fixed seed. Two sources built from the
    /// same seed produce the same sequence when drawn from a single thread.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T> {
        #[cfg(not(feature = "parking-lot"))]
        let mut rng = self.state.lock()?;
        #[cfg(feature = "parking-lot")]
        let mut rng = self.state.lock();
        Ok(f(&mut rng))
    }
}

macro_rules! impl_shared_random {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RandSource<$ty> for SharedRandom {
                fn rand(&self) -> Result<$ty> {
                    self.with_rng(|rng| rng.random())
                }

                fn rand_range(&self, range: Range<$ty>) -> Result<$ty> {
                    if range.is_empty() {
                        return Err(Error::invalid_range(range.start, range.end));
                    }
                    self.with_rng(|rng| rng.random_range(range))
                }
            }
        )*
    };
}

impl_shared_random!(i32, i64, u64);

impl RandSource<usize> for SharedRandom {
    fn rand(&self) -> Result<usize> {
        self.with_rng(|rng| rng.random::<u64>() as usize)
    }

    fn rand_range(&self, range: Range<usize>) -> Result<usize> {
        if range.is_empty() {
            return Err(Error::invalid_range(range.start, range.end));
        }
        self.with_rng(|rng| rng.random_range(range))
    }
}
