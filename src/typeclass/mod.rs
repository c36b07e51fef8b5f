//! Type class traits: the chaining contract shared by the computation types.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over a computation's value
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing dependent computations
//!
//! [`Maybe`](crate::control::Maybe) and [`Try`](crate::control::Try) implement
//! all of them. [`Io`](crate::effect::Io) implements [`TypeConstructor`] and
//! mirrors the rest with `Fn`-based inherent methods.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::control::{Maybe, Try};
//! use fpkernel::typeclass::{Applicative, Monad};
//!
//! fn add_checked<M>(left: M, right: i32) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     left.flat_map(|value| M::pure(value + right))
//! }
//!
//! assert_eq!(add_checked(Maybe::Just(1), 2), Maybe::Just(3));
//!
//! let attempted: Try<i32> = Try::Success(1);
//! assert_eq!(add_checked(attempted, 2), Try::Success(3));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
