use crate::{Error, FunctionDescriptor, Result};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// An argument whose string value is computed on demand.
///
/// Functions resolve only the arguments they need, so an expression with side
/// effects in an unselected branch (e.g. an unchosen `RandomChoice` option) is
/// never evaluated.
pub trait Resolvable {
    /// Computes the argument's value.
    ///
    /// # Errors
    /// Implementations report their own failures as [`Error::Evaluation`];
    /// functions propagate them unchanged.
    fn resolve(&self) -> Result<String>;
}

impl Resolvable for String {
    fn resolve(&self) -> Result<String> {
        Ok(self.clone())
    }
}

impl Resolvable for &str {
    fn resolve(&self) -> Result<String> {
        Ok((*self).to_owned())
    }
}

/// Adapts a closure into a [`Resolvable`].
///
/// # Example
/// ```
/// use ferrand::{Lazy, Resolvable, Result};
///
/// let arg = Lazy(|| -> Result<String> { Ok(format!("{}-{}", "a", "b")) });
/// assert_eq!(arg.resolve().unwrap(), "a-b");
/// ```
pub struct Lazy<F>(pub F);

impl<F> Resolvable for Lazy<F>
where
    F: Fn() -> Result<String>,
{
    fn resolve(&self) -> Result<String> {
        (self.0)()
    }
}

/// A boxed, unevaluated argument expression.
pub type Argument<'a> = Box<dyn Resolvable + 'a>;

/// Boxes each item into an [`Argument`].
pub fn arguments<'a, I>(items: I) -> Vec<Argument<'a>>
where
    I: IntoIterator,
    I::Item: Resolvable + 'a,
{
    items
        .into_iter()
        .map(|item| Box::new(item) as Argument<'a>)
        .collect()
}

/// Host-side state handed to every evaluation.
///
/// None of the random functions read it; it is carried so hosts can use the
/// same invocation contract for functions that do.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
    /// Output of the previous sample in the same thread, if any.
    pub previous_result: Option<String>,
    /// Name of the sampler currently being executed, if any.
    pub sampler: Option<String>,
}

/// The contract every random function implements.
///
/// A function is bound to its arguments with [`RandomFunction::bind`] (or
/// [`BoundFunction::new`] for trait objects), which checks the arity before
/// anything is evaluated. The resulting [`BoundFunction`] can then be
/// evaluated any number of times.
pub trait RandomFunction {
    /// Returns the function's static metadata.
    fn descriptor(&self) -> &'static FunctionDescriptor;

    /// Returns the key the host uses for lookup.
    fn key(&self) -> &'static str {
        self.descriptor().key
    }

    /// Returns the help text lines.
    fn usage(&self) -> &'static [&'static str] {
        self.descriptor().usage
    }

    /// Computes one result from already-bound arguments.
    ///
    /// Hosts should go through [`BoundFunction::evaluate`]. An argument slice
    /// whose length falls outside the arity still yields [`Error::Arity`]
    /// rather than a panic.
    fn execute(&self, args: &[Argument<'_>], ctx: &Context) -> Result<String>;

    /// Binds `args` to this function after checking the arity.
    ///
    /// # Errors
    /// - [`Error::Arity`] if `args.len()` is outside the declared bound.
    fn bind<'a>(&self, args: Vec<Argument<'a>>) -> Result<BoundFunction<'_, 'a>>
    where
        Self: Sized,
    {
        BoundFunction::new(self, args)
    }
}

/// A function together with its arity-checked arguments.
pub struct BoundFunction<'f, 'a> {
    function: &'f dyn RandomFunction,
    args: Vec<Argument<'a>>,
}

impl<'f, 'a> BoundFunction<'f, 'a> {
    /// Binds `args` to `function`.
    ///
    /// # Errors
    /// - [`Error::Arity`] if `args.len()` is outside the declared bound. No
    ///   argument is resolved in that case.
    pub fn new(function: &'f dyn RandomFunction, args: Vec<Argument<'a>>) -> Result<Self> {
        function.descriptor().validate(args.len())?;
        Ok(Self { function, args })
    }

    /// Returns the bound function's key.
    pub fn key(&self) -> &'static str {
        self.function.key()
    }

    /// Returns the number of bound arguments.
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Produces one result string.
    ///
    /// # Errors
    /// Any error from resolving or interpreting the arguments, or from the
    /// random source. Nothing is replaced with a default value.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(key = self.key())))]
    pub fn evaluate(&self, ctx: &Context) -> Result<String> {
        self.function.execute(&self.args, ctx)
    }
}

impl core::fmt::Debug for BoundFunction<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundFunction")
            .field("key", &self.key())
            .field("args", &self.args.len())
            .finish()
    }
}

pub(crate) fn arity_error(descriptor: &FunctionDescriptor, count: usize) -> Error {
    Error::Arity {
        key: descriptor.key,
        count,
        min: descriptor.arity.min,
        max: descriptor.arity.max,
    }
}
