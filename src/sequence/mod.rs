//! Combinators over collections of computations and plain sequences.
//!
//! - [`Sequence`], [`sequence`] and [`SequenceExt`]: fold many computations
//!   into one
//! - [`head_option`], [`tail_option`], [`cons`], [`match_sequence`]: shape of
//!   a sequence
//! - [`zip_with_index`], [`mk_string`], [`singleton`]: small conveniences
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::Maybe;
//! use fpkernel::sequence::{SequenceExt, zip_with_index};
//!
//! let labelled: Vec<String> = zip_with_index(["a", "b"])
//!     .map(|(label, index)| format!("{index}:{label}"))
//!     .collect();
//! assert_eq!(labelled, ["0:a", "1:b"]);
//!
//! let lengths = ["ab", "", "c"].traverse(|text| {
//!     if text.is_empty() { Maybe::Nothing } else { Maybe::Just(text.len()) }
//! });
//! assert_eq!(lengths, Maybe::Nothing);
//! ```

mod lift;
mod structure;

pub use lift::{Sequence, SequenceExt, Sequenced, sequence};
pub use structure::{
    ZipWithIndex, cons, head_option, match_sequence, mk_string, singleton, tail_option,
    zip_with_index,
};
