use crate::{
    Argument, BoundFunction, Error, RandSource, RandomChoice, RandomDate, RandomFunction,
    RandomInteger, RandomLong, Result, TimeSource,
};
use std::collections::BTreeMap;

/// Prefix legacy scripts put in front of function keys (`__RandomInteger`).
pub const LEGACY_PREFIX: &str = "__";

/// A registered function usable from any thread.
pub type SharedFunction = Box<dyn RandomFunction + Send + Sync>;

/// The lookup table a host publishes its functions through.
///
/// Keys are unique and listed in sorted order.
///
/// # Example
/// ```
/// use ferrand::{Context, Registry, SharedRandom, SystemClock, arguments};
///
/// let registry = Registry::with_defaults(SharedRandom::new(), SystemClock);
/// let bound = registry.bind("__RandomInteger", arguments(["1", "7"])).unwrap();
/// let v: i32 = bound.evaluate(&Context::default()).unwrap().parse().unwrap();
/// assert!((1..7).contains(&v));
/// ```
#[derive(Default)]
pub struct Registry {
    functions: BTreeMap<&'static str, SharedFunction>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `RandomChoice`, `RandomInteger`,
    /// `RandomLong` and `RandomDate`, all drawing from clones of `rng`.
    pub fn with_defaults<R, T>(rng: R, clock: T) -> Self
    where
        R: RandSource<usize> + RandSource<i32> + RandSource<i64> + Clone + Send + Sync + 'static,
        T: TimeSource<i64> + Send + Sync + 'static,
    {
        let mut registry = Self::new();
        registry.insert(Box::new(RandomChoice::new(rng.clone())));
        registry.insert(Box::new(RandomInteger::new(rng.clone())));
        registry.insert(Box::new(RandomLong::new(rng.clone())));
        registry.insert(Box::new(RandomDate::new(rng, clock)));
        registry
    }

    fn insert(&mut self, function: SharedFunction) {
        self.functions.insert(function.key(), function);
    }

    /// Adds `function` under its key.
    ///
    /// # Errors
    /// - [`Error::DuplicateKey`] if the key is already taken. The existing
    ///   entry is kept.
    pub fn register<F>(&mut self, function: F) -> Result<()>
    where
        F: RandomFunction + Send + Sync + 'static,
    {
        let key = function.key();
        if self.functions.contains_key(key) {
            return Err(Error::DuplicateKey(key));
        }
        self.insert(Box::new(function));
        Ok(())
    }

    /// Looks up a function by key, with or without the legacy `__` prefix.
    pub fn get(&self, key: &str) -> Option<&(dyn RandomFunction + Send + Sync)> {
        let key = key.strip_prefix(LEGACY_PREFIX).unwrap_or(key);
        self.functions.get(key).map(|f| f.as_ref())
    }

    /// Looks up `key` and binds `args` to it.
    ///
    /// # Errors
    /// - [`Error::UnknownFunction`] if nothing is registered under `key`.
    /// - [`Error::Arity`] if the argument count doesn't fit the function.
    pub fn bind<'a>(&self, key: &str, args: Vec<Argument<'a>>) -> Result<BoundFunction<'_, 'a>> {
        let function = self
            .get(key)
            .ok_or_else(|| Error::UnknownFunction(key.to_owned()))?;
        BoundFunction::new(function, args)
    }

    /// Iterates over registered functions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn RandomFunction + Send + Sync)> {
        self.functions.values().map(|f| f.as_ref())
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, SharedRandom, SystemClock, ThreadRandom, arguments};

    fn registry() -> Registry {
        Registry::with_defaults(SharedRandom::new(), SystemClock)
    }

    #[test]
    fn defaults_are_listed_in_key_order() {
        let keys: Vec<_> = registry().iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            ["RandomChoice", "RandomDate", "RandomInteger", "RandomLong"]
        );
    }

    #[test]
    fn lookup_accepts_legacy_prefix() {
        let registry = registry();
        assert_eq!(registry.get("RandomLong").unwrap().key(), "RandomLong");
        assert_eq!(registry.get("__RandomLong").unwrap().key(), "RandomLong");
        assert!(registry.get("randomlong").is_none());
    }

    #[test]
    fn bind_unknown_key_fails() {
        let err = registry().bind("RandomUuid", Vec::new()).unwrap_err();
        assert_eq!(err, Error::UnknownFunction("RandomUuid".into()));
    }

    #[test]
    fn bind_checks_arity() {
        let registry = registry();
        assert!(matches!(
            registry.bind("RandomChoice", arguments(["only"])),
            Err(Error::Arity { .. })
        ));
        let bound = registry
            .bind("__RandomChoice", arguments(["x", "y"]))
            .unwrap();
        assert_eq!(bound.key(), "RandomChoice");
        assert_eq!(bound.arg_count(), 2);
        let picked = bound.evaluate(&Context::default()).unwrap();
        assert!(picked == "x" || picked == "y");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        registry.register(RandomInteger::new(ThreadRandom)).unwrap();
        assert_eq!(
            registry.register(RandomInteger::new(SharedRandom::new())),
            Err(Error::DuplicateKey("RandomInteger"))
        );
        assert_eq!(registry.len(), 1);
    }
}
