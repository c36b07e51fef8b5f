//! Structural helpers over sequences.
//!
//! These work on any [`IntoIterator`] and never force more of the source than
//! they need: `tail_option`, `cons` and `zip_with_index` hand back lazy
//! iterators, so infinite sources are fine under bounded consumption.

use std::iter::{Chain, FusedIterator, Once};

use crate::control::{Maybe, ToMaybe};

/// Lifts a value into a one-element sequence.
///
/// ```rust
/// use fpkernel::sequence::singleton;
///
/// assert_eq!(singleton(7).collect::<Vec<_>>(), vec![7]);
/// ```
pub fn singleton<T>(value: T) -> Once<T> {
    std::iter::once(value)
}

/// Returns the first element, or `Nothing` for an empty source.
///
/// ```rust
/// use fpkernel::control::Maybe;
/// use fpkernel::sequence::head_option;
///
/// assert_eq!(head_option([1, 2]), Maybe::Just(1));
/// assert_eq!(head_option(Vec::<i32>::new()), Maybe::Nothing);
/// ```
pub fn head_option<I>(source: I) -> Maybe<I::Item>
where
    I: IntoIterator,
{
    source.into_iter().next().to_maybe()
}

/// Returns everything after the first element, or `Nothing` for an empty
/// source.
///
/// The rest is the remaining lazy iterator; none of it is consumed.
///
/// ```rust
/// use fpkernel::sequence::tail_option;
///
/// let rest = tail_option([1, 2]).fmap(|rest| rest.collect::<Vec<_>>());
/// assert_eq!(rest.get_or_else(Vec::new), vec![2]);
///
/// let naturals_after_zero = tail_option(0..).fmap(|rest| rest.take(3).collect::<Vec<_>>());
/// assert_eq!(naturals_after_zero.get_or_else(Vec::new), vec![1, 2, 3]);
/// ```
pub fn tail_option<I>(source: I) -> Maybe<I::IntoIter>
where
    I: IntoIterator,
{
    let mut iter = source.into_iter();
    iter.next().to_maybe().fmap(move |_| iter)
}

/// Prepends `head` to `tail` without consuming `tail`.
///
/// ```rust
/// use fpkernel::sequence::cons;
///
/// assert_eq!(cons(1, [2, 3]).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn cons<I>(head: I::Item, tail: I) -> Chain<Once<I::Item>, I::IntoIter>
where
    I: IntoIterator,
{
    singleton(head).chain(tail)
}

/// Dispatches on the shape of a sequence.
///
/// A non-empty source calls `on_cons(head, rest)`; an empty one calls
/// `on_nil()`. Exactly one of them runs.
///
/// # Examples
///
/// ```rust
/// use fpkernel::sequence::match_sequence;
///
/// fn sum(values: Vec<i32>) -> i32 {
///     match_sequence(values, |head, rest| head + rest.sum::<i32>(), || 0)
/// }
///
/// assert_eq!(sum(vec![1, 2, 3]), 6);
/// assert_eq!(sum(vec![]), 0);
/// ```
pub fn match_sequence<I, R, C, N>(source: I, on_cons: C, on_nil: N) -> R
where
    I: IntoIterator,
    C: FnOnce(I::Item, I::IntoIter) -> R,
    N: FnOnce() -> R,
{
    let mut iter = source.into_iter();
    head_option(&mut iter)
        .flat_map_with(move |_| Maybe::Just(iter), on_cons)
        .get_or_else(on_nil)
}

/// Pairs every element with its zero-based position.
///
/// ```rust
/// use fpkernel::sequence::zip_with_index;
///
/// let pairs: Vec<_> = zip_with_index(["a", "b"]).collect();
/// assert_eq!(pairs, vec![("a", 0), ("b", 1)]);
/// ```
pub fn zip_with_index<I>(source: I) -> ZipWithIndex<I::IntoIter>
where
    I: IntoIterator,
{
    ZipWithIndex {
        iter: source.into_iter(),
        index: 0,
    }
}

/// Iterator returned by [`zip_with_index`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipWithIndex<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Iterator for ZipWithIndex<I> {
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((element, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for ZipWithIndex<I> {}

impl<I: FusedIterator> FusedIterator for ZipWithIndex<I> {}

/// Concatenates characters left to right.
///
/// ```rust
/// use fpkernel::sequence::mk_string;
///
/// assert_eq!(mk_string(['o', 'k']), "ok");
/// ```
pub fn mk_string<I>(characters: I) -> String
where
    I: IntoIterator<Item = char>,
{
    characters.into_iter().collect()
}
