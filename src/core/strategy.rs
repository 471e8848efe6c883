//! Ordered extraction strategies.
//!
//! Tolerant parsing here means trying several known encodings of the same
//! value. Each encoding is a named pure function `&I -> Option<T>`, and a
//! list of them is evaluated in order until one produces a value. Keeping the
//! list as data makes the precedence visible in one place and lets every
//! strategy be tested on its own.

/// One named way of extracting a `T` from an `I`.
pub struct Strategy<I: ?Sized, T> {
    pub name: &'static str,
    pub extract: fn(&I) -> Option<T>,
}

impl<I: ?Sized, T> Strategy<I, T> {
    pub const fn new(name: &'static str, extract: fn(&I) -> Option<T>) -> Self {
        Self { name, extract }
    }
}

/// Runs `strategies` in order and returns the first value produced.
pub fn first_match<I: ?Sized, T>(input: &I, strategies: &[Strategy<I, T>]) -> Option<T> {
    strategies.iter().find_map(|strategy| {
        let found = (strategy.extract)(input);
        if found.is_some() {
            tracing::trace!("strategy '{}' matched", strategy.name);
        }
        found
    })
}
