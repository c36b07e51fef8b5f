//! Deferred side effects.
//!
//! [`Io`] describes an effect without performing it. Effects happen only when
//! [`Io::run`] is called, typically at the program's edge, and happen again on
//! every run.
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::effect::Io;
//!
//! let answer = Io::pure(20).map2(Io::pure(22), |a, b| a + b);
//! assert_eq!(answer.run(), 42);
//! ```

mod io;

pub use io::Io;
