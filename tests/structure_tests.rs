#![cfg(feature = "sequence")]
//! Integration tests for the sequence-structure helpers.

use fpkernel::control::Maybe;
use fpkernel::sequence::{
    cons, head_option, match_sequence, mk_string, singleton, tail_option, zip_with_index,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn head_option_of_empty_is_nothing() {
    assert_eq!(head_option(Vec::<i32>::new()), Maybe::Nothing);
}

#[rstest]
fn head_option_of_pair_is_first() {
    assert_eq!(head_option(vec![1, 2]), Maybe::Just(1));
}

#[rstest]
fn tail_option_of_pair_collects_to_second() {
    let rest = tail_option(vec![1, 2]).fmap(|rest| rest.collect::<Vec<_>>());
    assert_eq!(rest, Maybe::Just(vec![2]));
}

#[rstest]
fn cons_prepends() {
    assert_eq!(cons(1, vec![2, 3]).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn cons_onto_infinite_source() {
    let firsts: Vec<u32> = cons(0, 10..).take(3).collect();
    assert_eq!(firsts, vec![0, 10, 11]);
}

#[rstest]
fn zip_with_index_pairs_in_order() {
    let pairs: Vec<(&str, usize)> = zip_with_index(["a", "b"]).collect();
    assert_eq!(pairs, vec![("a", 0), ("b", 1)]);
}

#[rstest]
fn match_sequence_recursive_length() {
    fn length(values: Vec<u8>) -> usize {
        match_sequence(values, |_, rest| 1 + length(rest.collect()), || 0)
    }

    assert_eq!(length(vec![]), 0);
    assert_eq!(length(vec![7, 8, 9]), 3);
}

#[rstest]
fn singleton_then_cons() {
    let built: String = mk_string(cons('h', singleton('i')));
    assert_eq!(built, "hi");
}

proptest! {
    #[test]
    fn prop_cons_then_head_and_tail(head in any::<i32>(), tail in prop::collection::vec(any::<i32>(), 0..10)) {
        prop_assert_eq!(head_option(cons(head, tail.clone())), Maybe::Just(head));
        let rest = tail_option(cons(head, tail.clone())).fmap(|rest| rest.collect::<Vec<_>>());
        prop_assert_eq!(rest, Maybe::Just(tail));
    }

    #[test]
    fn prop_zip_with_index_indices_are_positions(values in prop::collection::vec(any::<u8>(), 0..20)) {
        for (value, index) in zip_with_index(values.clone()) {
            prop_assert_eq!(values[index], value);
        }
    }

    #[test]
    fn prop_mk_string_round_trips(text in ".{0,16}") {
        prop_assert_eq!(mk_string(text.chars()), text);
    }
}
