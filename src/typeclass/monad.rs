//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` lets the result of one computation decide which computation
//! runs next. Binding on an empty or failed computation short-circuits: the
//! continuation is never called.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # A note on `Io`
//!
//! [`Io`](crate::effect::Io) is replayable, so its continuations must be
//! callable once per run (`Fn`), not once in total (`FnOnce`). It therefore
//! exposes the same `flat_map`/`fmap` shape as inherent methods instead of
//! implementing this trait.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::Maybe;
//! use fpkernel::typeclass::Monad;
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
//! }
//!
//! assert_eq!(Monad::flat_map(Maybe::Just(8), halve), Maybe::Just(4));
//! assert_eq!(Monad::flat_map(Maybe::Just(3), halve), Maybe::Nothing);
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Monad;
    ///
    /// let z = Monad::flat_map(Maybe::Just(5), |n| if n > 10 { Maybe::Just(n) } else { Maybe::Nothing });
    /// assert_eq!(z, Maybe::Nothing);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// If `self` is empty or failed, that outcome propagates and `next` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Monad for crate::control::Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::Maybe<B>
    where
        F: FnOnce(A) -> crate::control::Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Monad for crate::control::Try<T, E>
where
    E: From<crate::control::Panic> + Clone,
{
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(T) -> crate::control::Try<B, E>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Captured, Maybe, Panic, Try};
    use rstest::rstest;

    fn generic_double<M>(computation: M) -> M::WithType<i32>
    where
        M: Monad<Inner = i32>,
    {
        computation.flat_map(|n| M::pure(n * 2))
    }

    #[rstest]
    #[case(Maybe::Just(21), Maybe::Just(42))]
    #[case(Maybe::Nothing, Maybe::Nothing)]
    fn maybe_generic_flat_map(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(generic_double(input), expected);
    }

    #[rstest]
    fn try_generic_flat_map_success() {
        let input: Try<i32> = Try::Success(21);
        assert_eq!(generic_double(input), Try::Success(42));
    }

    #[rstest]
    fn try_generic_flat_map_keeps_original_failure() {
        let error = Captured::new(Panic::new("original"));
        let input: Try<i32> = Try::Failure(error.clone());
        let result = generic_double(input);
        assert!(result.failed().fold(|captured| captured.same_as(&error), || false));
    }

    #[rstest]
    fn try_then_propagates_failure() {
        let first: Try<i32> = Try::Failure(Captured::new(Panic::new("first")));
        let second: Try<&str> = Try::Success("second");
        assert!(Monad::then(first, second).is_failure());
    }
}
