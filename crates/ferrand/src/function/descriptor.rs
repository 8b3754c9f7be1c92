use crate::{Arity, Result};

/// Static metadata for a random function.
///
/// Descriptors are `const` data built once and shared by every instance of a
/// function; [`key`] and [`usage`] never change between calls.
///
/// [`key`]: FunctionDescriptor::key
/// [`usage`]: FunctionDescriptor::usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionDescriptor {
    /// Stable identifier the host uses for lookup, e.g. `"RandomInteger"`.
    pub key: &'static str,
    /// Accepted argument count.
    pub arity: Arity,
    /// Human-readable help lines, in display order.
    pub usage: &'static [&'static str],
}

impl FunctionDescriptor {
    /// Checks an argument count against this function's arity.
    pub fn validate(&self, count: usize) -> Result<()> {
        self.arity.validate(self.key, count)
    }
}
