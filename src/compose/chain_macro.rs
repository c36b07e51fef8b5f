//! chain! macro for comprehension-style chaining.
//!
//! `chain!` writes nested binds as a flat list of steps, the way a query
//! comprehension does:
//!
//! - `pattern <= expression;` - Bind: extracts the value from a computation
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final value, after the last bind
//! - `expression` - Final expression (already a computation)
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::chain;
//! use fpkernel::control::Maybe;
//!
//! let area = chain! {
//!     width <= Maybe::Just(6);
//!     height <= Maybe::Just(7);
//!     yield width * height
//! };
//! assert_eq!(area, Maybe::Just(42));
//! ```
//!
//! # Expansion
//!
//! ```rust,ignore
//! chain! { x <= m; rest }        // m.flat_map(move |x| chain! { rest })
//! chain! { x <= m; yield e }     // m.fmap(move |x| e)
//! ```
//!
//! The steps resolve to whichever `flat_map`/`fmap` the computation has, so
//! `Maybe`, `Try` and `Io` all work. For `Io` the step closures must be `Fn`:
//! values bound earlier are reused on every run.

/// Comprehension syntax over `flat_map` and `fmap`.
///
/// # Syntax
///
/// ```text
/// chain! {
///     pattern <= computation;     // Bind (flat_map)
///     let pattern = expression;   // Pure let binding
///     pattern <= computation;
///     yield expression            // Map the last bind (fmap)
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use fpkernel::chain;
/// use fpkernel::control::Try;
///
/// fn parse(text: &str) -> Try<i32> {
///     Try::attempt(|| text.parse::<i32>())
/// }
///
/// let sum = chain! {
///     a <= parse("40");
///     let offset = 1;
///     b <= parse("1");
///     yield a + b + offset
/// };
/// assert_eq!(sum, Try::Success(42));
///
/// let broken = chain! {
///     a <= parse("forty");
///     b <= parse("1");
///     yield a + b
/// };
/// assert!(broken.is_failure());
/// ```
#[macro_export]
macro_rules! chain {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Last bind followed by yield: pattern <= computation; yield expression
    // ==========================================================================

    ($pattern:ident <= $computation:expr ; yield $result:expr) => {
        $computation.fmap(move |$pattern| $result)
    };

    (($($pattern:tt)*) <= $computation:expr ; yield $result:expr) => {
        $computation.fmap(move |($($pattern)*)| $result)
    };

    (_ <= $computation:expr ; yield $result:expr) => {
        $computation.fmap(move |_| $result)
    };

    // ==========================================================================
    // Bind: pattern <= computation; rest
    // ==========================================================================

    ($pattern:ident <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |$pattern| {
            $crate::chain!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |($($pattern)*)| {
            $crate::chain!($($rest)+)
        })
    };

    (_ <= $computation:expr ; $($rest:tt)+) => {
        $computation.flat_map(move |_| {
            $crate::chain!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $value:expr ; $($rest:tt)+) => {
        {
            let $pattern = $value;
            $crate::chain!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $value:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $value;
            $crate::chain!($($rest)+)
        }
    };
}
