//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types, so we cannot write a trait that
//! abstracts over `Maybe<_>`, `Try<_, E>` and `Io<_>` as type constructors
//! directly. [`TypeConstructor`] works around this with a GAT that names
//! "the same constructor applied to another type".
//!
//! # Example
//!
//! ```rust
//! use fpkernel::control::Maybe;
//! use fpkernel::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_int = Maybe::Just(42);
//! let nothing_string: Maybe<String> = empty_like(just_int);
//! assert_eq!(nothing_string, Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Try<i32, E>`, `WithType<String>` is `Try<String, E>`: the failure
    /// type is part of the constructor.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for crate::control::Maybe<A> {
    type Inner = A;
    type WithType<B> = crate::control::Maybe<B>;
}

#[cfg(feature = "control")]
impl<T, E> TypeConstructor for crate::control::Try<T, E> {
    type Inner = T;
    type WithType<B> = crate::control::Try<B, E>;
}

#[cfg(feature = "effect")]
impl<A> TypeConstructor for crate::effect::Io<A> {
    type Inner = A;
    type WithType<B> = crate::effect::Io<B>;
}
