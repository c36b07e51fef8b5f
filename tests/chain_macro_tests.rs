#![cfg(all(feature = "compose", feature = "control"))]
//! Integration tests for the chain! comprehension macro.

use fpkernel::chain;
use fpkernel::control::{Maybe, Try};
use rstest::rstest;

fn parse(text: &str) -> Try<i32> {
    Try::attempt(|| text.parse::<i32>())
}

fn lookup(key: &str) -> Maybe<i32> {
    match key {
        "width" => Maybe::Just(6),
        "height" => Maybe::Just(7),
        _ => Maybe::Nothing,
    }
}

#[rstest]
fn chain_is_flat_map_with() {
    let via_macro = chain! {
        width <= lookup("width");
        height <= lookup("height");
        yield width * height
    };
    let via_method = lookup("width").flat_map_with(|_| lookup("height"), |w, h| w * h);
    assert_eq!(via_macro, via_method);
    assert_eq!(via_macro, Maybe::Just(42));
}

#[rstest]
fn chain_short_circuits_on_nothing() {
    let area = chain! {
        width <= lookup("width");
        depth <= lookup("depth");
        yield width * depth
    };
    assert_eq!(area, Maybe::Nothing);
}

#[rstest]
fn chain_with_let_and_tuple() {
    let result = chain! {
        (low, high) <= Maybe::Just((1, 9));
        let span = high - low;
        middle <= Maybe::Just(low + span / 2);
        yield (middle, span)
    };
    assert_eq!(result, Maybe::Just((5, 8)));
}

#[rstest]
fn chain_over_try_guards_yield() {
    let result = chain! {
        divisor <= parse("0");
        dividend <= parse("10");
        yield dividend / divisor
    };
    assert!(result.failed().fold(|error| error.is_panic(), || false));
}

#[rstest]
fn chain_over_try_success() {
    let result = chain! {
        a <= parse("20");
        b <= parse("22");
        yield a + b
    };
    assert_eq!(result, Try::Success(42));
}
