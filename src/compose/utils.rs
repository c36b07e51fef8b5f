//! Helper functions (combinators) shared by the computation types.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`if_then_else`]: Lazy conditional where exactly one branch is evaluated

/// Returns its argument.
///
/// Used as the success branch when a computation is folded back to its value.
///
/// ```
/// use fpkernel::compose::identity;
/// use fpkernel::control::Maybe;
///
/// assert_eq!(Maybe::Just(3).fold(identity, || 0), 3);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and returns a clone of `value`.
///
/// ```
/// use fpkernel::compose::constant;
/// use fpkernel::effect::Io;
///
/// let answer = Io::pure("ignored").flat_map(constant(Io::pure(42)));
/// assert_eq!(answer.run(), 42);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of `function`.
///
/// ```
/// use fpkernel::compose::flip;
/// use fpkernel::sequence::cons;
///
/// let append_to = flip(|tail: Vec<u8>, head: u8| cons(head, tail).collect::<Vec<_>>());
/// assert_eq!(append_to(0, vec![1, 2]), vec![0, 1, 2]);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Evaluates exactly one of two branches.
///
/// `then_branch` runs if `condition` holds, `else_branch` otherwise. The
/// branch not taken is dropped without being called, which makes this usable
/// where both branches are expensive or effectful.
///
/// # Examples
///
/// ```
/// use fpkernel::compose::if_then_else;
///
/// let items: Vec<i32> = Vec::new();
/// let first = if_then_else(items.is_empty(), || -1, || items[0]);
/// assert_eq!(first, -1);
/// ```
#[inline]
pub fn if_then_else<T, F, G>(condition: bool, then_branch: F, else_branch: G) -> T
where
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    if condition {
        then_branch()
    } else {
        else_branch()
    }
}
