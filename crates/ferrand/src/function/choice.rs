use crate::{
    Argument, Arity, Context, Error, FunctionDescriptor, RandSource, RandomFunction, Result,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

const DESCRIPTOR: FunctionDescriptor = FunctionDescriptor {
    key: "RandomChoice",
    arity: Arity::at_least(2),
    usage: &[
        "Returns a random choice from comma separated list of choices, e.g. RandomChoice(Home,Work,Fax,Cell,Other)",
    ],
};

/// Picks one of its arguments uniformly at random.
///
/// Every argument is reachable, including the last. Only the selected
/// argument is resolved.
///
/// # Example
/// ```
/// use ferrand::{Context, RandomChoice, RandomFunction, SharedRandom, arguments};
///
/// let choice = RandomChoice::new(SharedRandom::new());
/// let bound = choice.bind(arguments(["Home", "Work", "Cell"])).unwrap();
/// let picked = bound.evaluate(&Context::default()).unwrap();
/// assert!(["Home", "Work", "Cell"].contains(&picked.as_str()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomChoice<R> {
    rng: R,
}

impl<R> RandomChoice<R>
where
    R: RandSource<usize>,
{
    /// Creates a new [`RandomChoice`] drawing indices from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> RandomFunction for RandomChoice<R>
where
    R: RandSource<usize>,
{
    fn descriptor(&self) -> &'static FunctionDescriptor {
        &DESCRIPTOR
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    fn execute(&self, args: &[Argument<'_>], _ctx: &Context) -> Result<String> {
        DESCRIPTOR.validate(args.len())?;
        let index = self.rng.rand_range(0..args.len())?;
        #[cfg(feature = "tracing")]
        tracing::debug!(options = args.len(), index, "random choice");
        let choice = args.get(index).ok_or_else(|| Error::OutOfRange {
            value: format!("choice index {index} of {}", args.len()),
        })?;
        choice.resolve()
    }
}
