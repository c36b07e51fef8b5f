//! Computation types for optionality and recoverable failure.
//!
//! - [`Maybe`]: zero-or-one value
//! - [`Try`]: a computation that succeeded or captured a failure
//! - [`Captured`] and [`Panic`]: the failure values minted by the guarded
//!   boundary
//!
//! # Examples
//!
//! ## Absence
//!
//! ```rust
//! use fpkernel::control::{Maybe, ToMaybe};
//!
//! let port = std::env::var("FPKERNEL_UNSET_PORT").ok().to_maybe();
//! assert_eq!(port.get_or_else(|| "8080".to_string()), "8080");
//! ```
//!
//! ## Captured failure
//!
//! ```rust
//! use fpkernel::control::{Maybe, Try};
//!
//! let parsed: Try<u16> = Try::attempt(|| "80".parse::<u16>());
//! let doubled = parsed.fmap(|port| port * 2);
//! assert_eq!(doubled.as_maybe(), Maybe::Just(160));
//! ```

mod attempt;
mod failure;
mod maybe;

pub use attempt::Try;
pub use failure::{Captured, Panic};
pub use maybe::{Maybe, ToMaybe};
