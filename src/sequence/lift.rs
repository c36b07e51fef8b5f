//! Lifting a collection of computations into one computation of a collection.
//!
//! [`Sequence`] turns N computations of one type into a single computation
//! that yields the N results in input order:
//!
//! | Element   | Result           | Combined behavior                                        |
//! |-----------|------------------|----------------------------------------------------------|
//! | `Maybe<A>`  | `Maybe<Vec<A>>`  | `Nothing` at the first `Nothing`                        |
//! | `Try<A, E>` | `Try<Vec<A>, E>` | the first `Failure` in input order                      |
//! | `Io<A>`     | `Io<Vec<A>>`     | runs every element left to right, on every run          |
//!
//! The fold is strictly left to right. For `Maybe` and `Try` it stops pulling
//! from the input as soon as the outcome is decided, so lazily produced
//! computations after the first absence or failure are never built. The fold
//! is iterative: its stack depth does not grow with the input length.
//!
//! All elements must have the same computation type; mixing them does not
//! compile:
//!
//! ```rust,compile_fail
//! use fpkernel::control::{Maybe, Try};
//! use fpkernel::sequence::sequence;
//!
//! let success: Try<i32> = Try::Success(2);
//! let mixed = sequence(vec![Maybe::Just(1), success]);
//! ```

use std::rc::Rc;

use crate::compose::if_then_else;
use crate::control::{Maybe, Try};
use crate::effect::Io;
use crate::typeclass::TypeConstructor;

/// The result of sequencing computations of type `M`: the same constructor
/// applied to a `Vec` of the inner values.
pub type Sequenced<M> = <M as TypeConstructor>::WithType<Vec<<M as TypeConstructor>::Inner>>;

/// Computations that can be folded from a sequence into one computation.
///
/// # Laws
///
/// - `sequence([])` succeeds (or, for `Io`, runs) with an empty `Vec`.
/// - `sequence([pure(a)])` is `pure(vec![a])`.
/// - Results keep input order.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Maybe;
/// use fpkernel::sequence::Sequence;
///
/// let all = Maybe::sequence([Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)]);
/// assert_eq!(all, Maybe::Just(vec![1, 2, 3]));
///
/// let gap = Maybe::sequence([Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)]);
/// assert_eq!(gap, Maybe::Nothing);
/// ```
pub trait Sequence: TypeConstructor + Sized {
    /// Folds `computations` into one computation of all their results.
    fn sequence<I>(computations: I) -> Sequenced<Self>
    where
        I: IntoIterator<Item = Self>;
}

impl<A> Sequence for Maybe<A> {
    fn sequence<I>(computations: I) -> Maybe<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        computations.into_iter().collect()
    }
}

impl<T, E> Sequence for Try<T, E> {
    fn sequence<I>(computations: I) -> Try<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        computations.into_iter().collect()
    }
}

impl<A: 'static> Sequence for Io<A> {
    /// Builds an `Io` that runs every element in input order.
    ///
    /// The elements are collected once, when the sequence is built; each run
    /// then executes all of them again.
    fn sequence<I>(computations: I) -> Io<Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let steps: Rc<[Self]> = computations.into_iter().collect();
        tracing::trace!(count = steps.len(), "io sequence built");
        if_then_else(
            steps.is_empty(),
            || Io::new(Vec::new),
            move || {
                Io::new(move || {
                    tracing::trace!(count = steps.len(), "running io sequence");
                    steps.iter().map(Io::run).collect()
                })
            },
        )
    }
}

/// Folds `computations` into one computation of all their results.
///
/// Free-function form of [`Sequence::sequence`]; the computation type is
/// inferred from the elements.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Try;
/// use fpkernel::sequence::sequence;
///
/// let parsed: Vec<Try<u8>> = vec![
///     Try::attempt(|| "1".parse::<u8>()),
///     Try::attempt(|| "2".parse::<u8>()),
/// ];
/// assert_eq!(sequence(parsed), Try::Success(vec![1, 2]));
/// ```
pub fn sequence<M, I>(computations: I) -> Sequenced<M>
where
    M: Sequence,
    I: IntoIterator<Item = M>,
{
    M::sequence(computations)
}

/// Method-call forms of [`sequence`] and `traverse` for any iterable.
///
/// # Examples
///
/// ```rust
/// use fpkernel::control::Maybe;
/// use fpkernel::sequence::SequenceExt;
///
/// fn non_negative(n: i32) -> Maybe<i32> {
///     if n >= 0 { Maybe::Just(n) } else { Maybe::Nothing }
/// }
///
/// assert_eq!(vec![1, 2].traverse(non_negative), Maybe::Just(vec![1, 2]));
/// assert_eq!(vec![1, -2].traverse(non_negative), Maybe::Nothing);
/// assert_eq!(vec![Maybe::Just('a')].sequence(), Maybe::Just(vec!['a']));
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// Folds the computations in `self` into one computation.
    fn sequence(self) -> Sequenced<Self::Item>
    where
        Self::Item: Sequence,
    {
        <Self::Item as Sequence>::sequence(self)
    }

    /// Maps every element to a computation and sequences the results.
    ///
    /// Elements are mapped lazily, so `function` is not called for elements
    /// after the first absence or failure.
    fn traverse<M, F>(self, function: F) -> Sequenced<M>
    where
        M: Sequence,
        F: FnMut(Self::Item) -> M,
    {
        M::sequence(self.into_iter().map(function))
    }
}

impl<I: IntoIterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Captured, Panic};
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    #[rstest]
    #[case(vec![Maybe::Just(1), Maybe::Just(2), Maybe::Just(3)], Maybe::Just(vec![1, 2, 3]))]
    #[case(vec![Maybe::Just(1), Maybe::Nothing, Maybe::Just(3)], Maybe::Nothing)]
    #[case(vec![], Maybe::Just(vec![]))]
    fn maybe_sequence(#[case] input: Vec<Maybe<i32>>, #[case] expected: Maybe<Vec<i32>>) {
        assert_eq!(sequence(input), expected);
    }

    #[rstest]
    fn try_sequence_surfaces_first_failure() {
        let first = Captured::new(Panic::new("first"));
        let second = Captured::new(Panic::new("second"));
        let input: Vec<Try<i32>> = vec![
            Try::Success(1),
            Try::Failure(first.clone()),
            Try::Failure(second),
        ];
        let error = sequence(input).get_or_error().unwrap_err();
        assert!(error.same_as(&first));
    }

    #[rstest]
    fn traverse_stops_calling_after_failure() {
        let calls = Cell::new(0);
        let result = [1, 0, 2, 3].traverse(|n: i32| {
            calls.set(calls.get() + 1);
            let attempted: Try<i32> = Try::guard(|| 10 / n);
            attempted
        });
        assert!(result.is_failure());
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn io_sequence_defers_and_replays() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let steps: Vec<Io<usize>> = (0..3)
            .map(|index| {
                let log = Rc::clone(&log);
                Io::new(move || {
                    log.borrow_mut().push(index);
                    index * 10
                })
            })
            .collect();

        let all = sequence(steps);
        assert!(log.borrow().is_empty());

        assert_eq!(all.run(), vec![0, 10, 20]);
        assert_eq!(all.run(), vec![0, 10, 20]);
        assert_eq!(*log.borrow(), [0, 1, 2, 0, 1, 2]);
    }

    #[rstest]
    fn io_sequence_of_nothing_runs_to_empty() {
        let empty: Vec<Io<i32>> = Vec::new();
        assert_eq!(sequence(empty).run(), Vec::<i32>::new());
    }

    #[rstest]
    fn sequence_of_many_is_iterative() {
        let many = (0..100_000).map(Maybe::Just);
        let folded = Maybe::sequence(many).fmap(|values| values.len());
        assert_eq!(folded, Maybe::Just(100_000));
    }
}
