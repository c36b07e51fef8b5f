//! Applicative type class - lifting values and combining independent computations.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the computation, and `map2`, which combines two computations.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))                     // homomorphism via fmap
//! fa.map2(pure(()), |a, _| a) == fa                 // right unit
//! pure(()).map2(fa, |_, a| a) == fa                 // left unit
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::Maybe;
//! use fpkernel::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can lift values and combine computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Try;
    /// use fpkernel::typeclass::Applicative;
    ///
    /// let lifted: Try<&str> = <Try<()>>::pure("hello");
    /// assert_eq!(lifted.get_or_else(|| "fallback"), "hello");
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two computations using a binary function.
    ///
    /// If either side is empty or failed, so is the result. When both sides
    /// failed, the left failure wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Applicative;
    ///
    /// let missing: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(1).map2(missing, |x, y| x + y), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two computations into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(1).product(Maybe::Just("a")), Maybe::Just((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two computations and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two computations and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for crate::control::Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> crate::control::Maybe<B> {
        crate::control::Maybe::Just(value)
    }

    fn map2<B, C, F>(
        self,
        other: crate::control::Maybe<B>,
        function: F,
    ) -> crate::control::Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        use crate::control::Maybe::{Just, Nothing};

        match (self, other) {
            (Just(a), Just(b)) => Just(function(a, b)),
            _ => Nothing,
        }
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Applicative for crate::control::Try<T, E>
where
    E: From<crate::control::Panic> + Clone,
{
    #[inline]
    fn pure<B>(value: B) -> crate::control::Try<B, E> {
        crate::control::Try::Success(value)
    }

    fn map2<B, C, F>(self, other: crate::control::Try<B, E>, function: F) -> crate::control::Try<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        use crate::control::Try::{Failure, Success};

        match (self, other) {
            (Success(a), Success(b)) => crate::control::Try::guard(|| function(a, b)),
            (Failure(error), _) | (Success(_), Failure(error)) => Failure(error),
        }
    }
}
