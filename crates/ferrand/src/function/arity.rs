use crate::{Error, Result};

/// An inclusive bound on the number of arguments a function accepts.
///
/// `max: None` means the function is variadic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    /// Accepts anywhere from `min` to `max` arguments, inclusive.
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Accepts `min` or more arguments.
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Returns `true` if `count` arguments fall inside the bound.
    pub const fn accepts(&self, count: usize) -> bool {
        if count < self.min {
            return false;
        }
        match self.max {
            Some(max) => count <= max,
            None => true,
        }
    }

    /// Checks `count` against the bound, naming `key` in the error.
    ///
    /// # Errors
    /// - [`Error::Arity`] if `count` is below `min` or above `max`.
    pub fn validate(&self, key: &'static str, count: usize) -> Result<()> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(Error::Arity {
                key,
                count,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_arity() {
        let arity = Arity::between(0, 2);
        assert!(arity.validate("f", 0).is_ok());
        assert!(arity.validate("f", 2).is_ok());
        assert_eq!(
            arity.validate("f", 3),
            Err(Error::Arity {
                key: "f",
                count: 3,
                min: 0,
                max: Some(2),
            })
        );
    }

    #[test]
    fn variadic_arity() {
        let arity = Arity::at_least(2);
        assert!(!arity.accepts(1));
        assert!(arity.accepts(2));
        assert!(arity.accepts(10_000));
    }
}
