//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a computation without changing
//! its shape: a `Nothing` stays `Nothing`, a `Failure` keeps its error.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::Maybe;
//! use fpkernel::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::Just(5)), Maybe::Just("#5".to_string()));
//! assert_eq!(describe(Maybe::Nothing), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Functor;
    ///
    /// let x = Maybe::Just(5);
    /// assert_eq!(Functor::fmap(x, |n| n * 2), Maybe::Just(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The functor is left untouched, which is useful when the inner type
    /// does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Functor;
    ///
    /// let x = Maybe::Just("hello".to_string());
    /// assert_eq!(x.fmap_ref(|s| s.len()), Maybe::Just(5));
    /// assert!(x.is_just());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    /// use fpkernel::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for crate::control::Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> crate::control::Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}

// =============================================================================
// Try<T, E> Implementation
//
// fmap re-enters the guarded boundary, so the failure type must be able to
// hold a caught panic.
// =============================================================================

#[cfg(feature = "control")]
impl<T, E> Functor for crate::control::Try<T, E>
where
    E: From<crate::control::Panic> + Clone,
{
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        Self::fmap(self, function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> crate::control::Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => crate::control::Try::guard(|| function(value)),
            Self::Failure(error) => crate::control::Try::Failure(error.clone()),
        }
    }
}
