//! Try type - a computation that either succeeded or captured a failure.
//!
//! `Try<T, E>` is `Success(T)` or `Failure(E)`. It is built by *attempting* a
//! computation: [`Try::attempt`] and [`Try::guard`] are the guarded boundary
//! where raised failure signals (an `Err` return or a panic) become
//! `Failure` values. Combinators thread failures through unchanged; only
//! [`Try::fmap`] and the combine step of [`Try::flat_map_with`] re-enter the
//! boundary, because they run caller code that might panic.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::{Maybe, Try};
//! use std::num::ParseIntError;
//!
//! fn parse(text: &str) -> Try<i32> {
//!     Try::attempt(|| text.parse::<i32>())
//! }
//!
//! let total = parse("20").flat_map(|a| parse("22").fmap(move |b| a + b));
//! assert_eq!(total.as_maybe(), Maybe::Just(42));
//!
//! let broken = parse("20").flat_map(|a| parse("x").fmap(move |b| a + b));
//! let error = broken.get_or_error().unwrap_err();
//! assert!(error.is::<ParseIntError>());
//! ```

use std::fmt;

use super::failure::{Captured, Panic, guarded};
use super::maybe::Maybe;

/// Outcome of an attempted computation.
///
/// The failure type defaults to [`Captured`], which can hold any error and
/// any caught panic. A custom `E` works too, provided the guarded boundary can
/// store a panic in it (`E: From<Panic>`).
///
/// # Laws
///
/// 1. **Left Identity**: `Try::Success(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Try::Success) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Try<T, E = Captured> {
    /// The computation returned a value.
    Success(T),
    /// The computation raised a failure, kept exactly as raised.
    Failure(E),
}

impl<T, E> Try<T, E> {
    // =========================================================================
    // Guarded Boundary
    // =========================================================================

    /// Runs `supplier` inside the guarded boundary.
    ///
    /// `Ok(v)` becomes `Success(v)`, `Err(x)` becomes `Failure(x.into())`
    /// and a panic becomes `Failure(E::from(panic))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::{Captured, Try};
    ///
    /// let parsed: Try<u8> = Try::attempt(|| "300".parse::<u8>());
    /// assert!(parsed.is_failure());
    ///
    /// let chained: Try<u8> = Try::attempt(|| {
    ///     let base: u8 = "20".parse()?;
    ///     Ok::<_, Captured>(base * 2)
    /// });
    /// assert_eq!(chained.get_or_else(|| 0), 40);
    /// ```
    pub fn attempt<F, X>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<E>,
        E: From<Panic>,
    {
        match guarded(supplier) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::Failure(error.into()),
            Err(panic) => Self::Failure(E::from(panic)),
        }
    }

    /// Runs an infallible `supplier` inside the guarded boundary.
    ///
    /// A panic is the only failure signal such a computation can raise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Try;
    ///
    /// fn divide(numerator: i32, denominator: i32) -> Try<i32> {
    ///     Try::guard(|| numerator / denominator)
    /// }
    ///
    /// assert_eq!(divide(84, 2), Try::Success(42));
    /// assert!(divide(1, 0).failed().fold(|error| error.is_panic(), || false));
    /// ```
    pub fn guard<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T,
        E: From<Panic>,
    {
        match guarded(supplier) {
            Ok(value) => Self::Success(value),
            Err(panic) => Self::Failure(E::from(panic)),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Eliminates the `Try` by running exactly one of two closures.
    #[inline]
    pub fn fold<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind: `Success(v)` becomes `function(v)`; a `Failure` is
    /// returned with its original error, not re-wrapped.
    ///
    /// `function` runs outside the guarded boundary: a panic inside it
    /// propagates to the caller.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        self.fold(function, Try::Failure)
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        self.flat_map(function)
    }

    /// Maps the success value inside the guarded boundary.
    ///
    /// Unlike [`Maybe::fmap`], a panic raised by `function` is captured as a
    /// `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Try;
    ///
    /// let items: Try<Vec<i32>> = Try::Success(vec![]);
    /// let first = items.fmap(|items| items[0]);
    /// assert!(first.is_failure());
    /// ```
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
        E: From<Panic>,
    {
        self.flat_map(|value| Try::guard(|| function(value)))
    }

    /// Binds with `function`, then combines both values with `selector`
    /// inside the guarded boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Try;
    ///
    /// let width: Try<u32> = Try::Success(6);
    /// let area = width.flat_map_with(|w| Try::Success(w + 1), |w, h| w * h);
    /// assert_eq!(area, Try::Success(42));
    /// ```
    #[inline]
    pub fn flat_map_with<B, C, F, S>(self, function: F, selector: S) -> Try<C, E>
    where
        F: FnOnce(&T) -> Try<B, E>,
        S: FnOnce(T, B) -> C,
        E: From<Panic>,
    {
        self.flat_map(|first| {
            function(&first).flat_map(|second| Try::guard(|| selector(first, second)))
        })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value or the result of `default`.
    ///
    /// `default` is not evaluated for `Success`.
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> T
    where
        D: FnOnce() -> T,
    {
        self.fold(crate::compose::identity, |_| default())
    }

    /// Returns the success value, or the originally captured error.
    ///
    /// The error is the very value captured at the boundary, so callers that
    /// propagate it with `?` surface the original failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::{Captured, Panic, Try};
    ///
    /// let original = Captured::new(Panic::new("disk on fire"));
    /// let failed: Try<i32> = Try::Failure(original.clone());
    ///
    /// let surfaced = failed.get_or_error().unwrap_err();
    /// assert!(surfaced.same_as(&original));
    /// ```
    #[inline]
    pub fn get_or_error(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }

    /// Converts into a [`Maybe`], discarding the error.
    ///
    /// This loses information: every `Failure` becomes the same `Nothing`,
    /// whatever its cause. Use [`failed`](Self::failed) or
    /// [`get_or_error`](Self::get_or_error) when the cause matters.
    #[inline]
    pub fn as_maybe(self) -> Maybe<T> {
        self.fold(Maybe::Just, |_| Maybe::Nothing)
    }

    /// Projects the failure: `Failure(e)` becomes `Just(e)`, `Success` becomes
    /// `Nothing`.
    #[inline]
    pub fn failed(self) -> Maybe<E> {
        self.fold(|_| Maybe::Nothing, Maybe::Just)
    }
}

impl<T, E> From<Result<T, E>> for Try<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    fn from(attempted: Try<T, E>) -> Self {
        attempted.get_or_error()
    }
}

impl<T, E> From<Try<T, E>> for Maybe<T> {
    fn from(attempted: Try<T, E>) -> Self {
        attempted.as_maybe()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

/// Collects an iterator of `Try` values, stopping at the first `Failure`.
///
/// The first failure in iteration order is the one returned, and no element
/// after it is pulled from the iterator.
impl<A, V, E> FromIterator<Try<A, E>> for Try<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Try<A, E>>,
    {
        iter.into_iter()
            .map(Try::get_or_error)
            .collect::<Result<V, E>>()
            .into()
    }
}
