//! # fpkernel
//!
//! A functional kernel for Rust: three computation types and the lawful
//! combinators that lift operations over collections of them.
//!
//! ## Overview
//!
//! Every higher-level utility built on this crate composes through these
//! computation types rather than through ad-hoc null checks, panics or
//! direct side effects:
//!
//! - **[`Maybe`](control::Maybe)**: zero-or-one value
//! - **[`Try`](control::Try)**: a computation that succeeded or captured a failure
//! - **[`Io`](effect::Io)**: a deferred, replayable side effect
//! - **Sequence combinators**: [`sequence`](sequence::sequence), [`head_option`](sequence::head_option),
//!   [`zip_with_index`](sequence::zip_with_index) and friends
//! - **Type Classes**: `Functor`, `Applicative`, `Monad`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function helpers (`identity`, `if_then_else`, `chain!`)
//! - `control`: `Maybe` and `Try`
//! - `effect`: `Io`
//! - `sequence`: `Sequence` and the sequence-structure utilities
//! - `serde`: Serialization support for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkernel::prelude::*;
//!
//! fn parse(text: &str) -> Try<i32> {
//!     Try::attempt(|| text.parse::<i32>())
//! }
//!
//! let parsed = ["1", "2", "3"].traverse(parse);
//! assert_eq!(parsed.as_maybe(), Maybe::Just(vec![1, 2, 3]));
//!
//! let broken = ["1", "two", "3"].traverse(parse);
//! assert!(broken.is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpkernel::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "sequence")]
pub mod sequence;
