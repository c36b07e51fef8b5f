//! Maybe type - an optional value as a first-class computation.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Absence is a normal outcome,
//! not an error: it carries no diagnostic payload. The only way to enter a
//! `Maybe` from a possibly-absent source is [`ToMaybe`] (or `From<Option<T>>`),
//! which maps the absent case to `Nothing` and never produces a `Just` that
//! wraps an absent value.
//!
//! Every derived operation is expressed through [`Maybe::fold`] or
//! [`Maybe::flat_map`], so the monad laws carry over to all of them.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::{Maybe, ToMaybe};
//!
//! let port = std::env::var("FPKERNEL_UNSET_PORT").ok().to_maybe();
//! let port = port
//!     .flat_map(|text| text.parse::<u16>().ok().to_maybe())
//!     .filter(|port| *port != 0)
//!     .get_or_else(|| 8080);
//! assert_eq!(port, 8080);
//! ```

use std::fmt;

/// Zero-or-one value of type `T`.
///
/// # Laws
///
/// `Maybe` satisfies the monad laws:
///
/// 1. **Left Identity**: `Maybe::Just(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Maybe::Just) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Maybe;
///
/// let present = Maybe::Just(3);
/// let absent: Maybe<i32> = Maybe::Nothing;
///
/// assert_eq!(present.fmap(|n| n * 2), Maybe::Just(6));
/// assert_eq!(absent.fmap(|n| n * 2), Maybe::Nothing);
/// assert_ne!(present, absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Maybe<T> {
    /// Holds no value.
    Nothing,
    /// Holds exactly one value.
    Just(T),
}

/// Conversion from a possibly-absent value into a [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::{Maybe, ToMaybe};
///
/// assert_eq!(Some(1).to_maybe(), Maybe::Just(1));
/// assert_eq!(None::<i32>.to_maybe(), Maybe::Nothing);
/// ```
pub trait ToMaybe {
    /// The type of the present value.
    type Value;

    /// Converts `self`, mapping absence to [`Maybe::Nothing`].
    fn to_maybe(self) -> Maybe<Self::Value>;
}

impl<T> ToMaybe for Option<T> {
    type Value = T;

    #[inline]
    fn to_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns `true` iff this is `Nothing`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` iff this is `Just`.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Eliminates the `Maybe` by running exactly one of two closures.
    ///
    /// `just` receives the contained value; `nothing` receives nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|n| format!("got {n}"), || "empty".to_string());
    /// assert_eq!(describe(Maybe::Just(4)), "got 4");
    /// assert_eq!(describe(Maybe::Nothing), "empty");
    /// ```
    #[inline]
    pub fn fold<R, J, N>(self, just: J, nothing: N) -> R
    where
        J: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(Some, || None)
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Monadic bind: `Just(v)` becomes `function(v)`, `Nothing` stays `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    ///
    /// let reciprocal = |n: f64| if n == 0.0 { Maybe::Nothing } else { Maybe::Just(1.0 / n) };
    /// assert_eq!(Maybe::Just(4.0).flat_map(reciprocal), Maybe::Just(0.25));
    /// assert_eq!(Maybe::Just(0.0).flat_map(reciprocal), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.fold(function, || Maybe::Nothing)
    }

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.flat_map(function)
    }

    /// Maps the contained value; `Nothing` is unaffected.
    #[inline]
    pub fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.flat_map(|value| Maybe::Just(function(value)))
    }

    /// Binds with `function`, then combines the original value and the bound
    /// value with `selector`.
    ///
    /// This is the two-generator comprehension form and is pure sugar over
    /// `flat_map` and `fmap`. `function` borrows the first value so that
    /// `selector` can still take it by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    ///
    /// let lookup_age = |name: &&str| if *name == "ada" { Maybe::Just(36) } else { Maybe::Nothing };
    ///
    /// let found = Maybe::Just("ada").flat_map_with(lookup_age, |name, age| format!("{name}: {age}"));
    /// assert_eq!(found, Maybe::Just("ada: 36".to_string()));
    ///
    /// let missing = Maybe::Just("bob").flat_map_with(lookup_age, |name, age| format!("{name}: {age}"));
    /// assert_eq!(missing, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map_with<B, C, F, S>(self, function: F, selector: S) -> Maybe<C>
    where
        F: FnOnce(&T) -> Maybe<B>,
        S: FnOnce(T, B) -> C,
    {
        self.flat_map(|first| function(&first).fmap(|second| selector(first, second)))
    }

    /// Keeps `Just(v)` iff `predicate(&v)` holds.
    ///
    /// The predicate runs at most once and never for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(4).filter(|n| n % 2 == 0), Maybe::Just(4));
    /// assert_eq!(Maybe::Just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.flat_map(|value| {
            crate::compose::if_then_else(
                predicate(&value),
                || Maybe::Just(value),
                || Maybe::Nothing,
            )
        })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value or the result of `default`.
    ///
    /// `default` is not evaluated for `Just`.
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> T
    where
        D: FnOnce() -> T,
    {
        self.fold(crate::compose::identity, default)
    }

    /// Returns the contained value, or `Err(error())` for `Nothing`.
    ///
    /// This is how absence is surfaced as a failure: the caller propagates
    /// the `Err` with `?`. `error` is not evaluated for `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkernel::control::Maybe;
    ///
    /// fn first_even(values: &[i32]) -> Result<i32, String> {
    ///     let found = values.iter().copied().find(|n| n % 2 == 0);
    ///     let even = Maybe::from(found).get_or_error(|| "no even value".to_string())?;
    ///     Ok(even * 10)
    /// }
    ///
    /// assert_eq!(first_even(&[1, 4, 5]), Ok(40));
    /// assert_eq!(first_even(&[1, 3]), Err("no even value".to_string()));
    /// ```
    #[inline]
    pub fn get_or_error<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.fold(Ok, || Err(error()))
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.to_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

/// Collects an iterator of `Maybe` values, stopping at the first `Nothing`.
///
/// Elements after the first `Nothing` are not pulled from the iterator.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::Just(1), Maybe::Just(2)].into_iter().collect();
/// assert_eq!(all, Maybe::Just(vec![1, 2]));
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .to_maybe()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(ToMaybe::to_maybe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(5), Maybe::Just(5))]
    #[case(None, Maybe::Nothing)]
    fn to_maybe_maps_absence_to_nothing(#[case] source: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(source.to_maybe(), expected);
    }

    #[rstest]
    fn nested_absence_is_not_wrapped() {
        let source: Option<Option<i32>> = None;
        assert_eq!(source.to_maybe(), Maybe::Nothing);
    }

    #[rstest]
    #[case(Maybe::Just(1), false)]
    #[case(Maybe::Nothing, true)]
    fn is_empty_iff_nothing(#[case] value: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(value.is_empty(), expected);
        assert_eq!(value.is_just(), !expected);
    }

    #[rstest]
    fn fold_runs_exactly_one_branch() {
        let just_calls = Cell::new(0);
        let nothing_calls = Cell::new(0);

        let bump_just = |_: i32| just_calls.set(just_calls.get() + 1);
        let bump_nothing = || nothing_calls.set(nothing_calls.get() + 1);

        Maybe::Just(1).fold(bump_just, bump_nothing);
        assert_eq!((just_calls.get(), nothing_calls.get()), (1, 0));

        Maybe::Nothing.fold(bump_just, bump_nothing);
        assert_eq!((just_calls.get(), nothing_calls.get()), (1, 1));
    }

    #[rstest]
    fn filter_invokes_predicate_once() {
        let calls = Cell::new(0);
        let result = Maybe::Just(10).filter(|n| {
            calls.set(calls.get() + 1);
            *n > 5
        });
        assert_eq!(result, Maybe::Just(10));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn filter_skips_predicate_for_nothing() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn get_or_else_is_lazy_for_just() {
        let calls = Cell::new(0);
        let value = Maybe::Just(1).get_or_else(|| {
            calls.set(calls.get() + 1);
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn get_or_else_uses_default_for_nothing() {
        assert_eq!(Maybe::Nothing.get_or_else(|| 9), 9);
    }

    #[rstest]
    fn get_or_error_is_lazy_for_just() {
        let calls = Cell::new(0);
        let result: Result<i32, &str> = Maybe::Just(1).get_or_error(|| {
            calls.set(calls.get() + 1);
            "missing"
        });
        assert_eq!(result, Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn get_or_error_surfaces_supplied_error() {
        let result: Result<i32, &str> = Maybe::Nothing.get_or_error(|| "missing");
        assert_eq!(result, Err("missing"));
    }

    #[rstest]
    fn flat_map_with_short_circuits_selector() {
        let calls = Cell::new(0);
        let result = Maybe::Just(1).flat_map_with(
            |_| Maybe::<i32>::Nothing,
            |a, b| {
                calls.set(calls.get() + 1);
                a + b
            },
        );
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn display_and_debug() {
        assert_eq!(Maybe::Just(3).to_string(), "Just(3)");
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
        assert_eq!(format!("{:?}", Maybe::Just("a")), "Just(\"a\")");
    }

    #[rstest]
    fn option_round_trip_through_from() {
        let maybe: Maybe<i32> = Some(2).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(2));
    }

    #[rstest]
    fn collect_stops_pulling_after_nothing() {
        let pulled = Cell::new(0);
        let collected: Maybe<Vec<i32>> = [Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1))
            .collect();
        assert_eq!(collected, Maybe::Nothing);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn default_is_nothing() {
        assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
    }

    #[rstest]
    #[case(None, Some(0))]
    #[case(Some(1), Some(2))]
    #[case(Some(3), None)]
    fn ordering_agrees_with_option(#[case] left: Option<i32>, #[case] right: Option<i32>) {
        assert_eq!(left.to_maybe().cmp(&right.to_maybe()), left.cmp(&right));
    }
}
