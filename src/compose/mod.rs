//! Function helpers and the `chain!` comprehension macro.
//!
//! - [`identity`], [`constant`], [`flip`]: classic combinators
//! - [`if_then_else`]: lazy conditional expression
//! - [`chain!`](crate::chain): comprehension syntax over `flat_map` and `fmap`
//!
//! # Examples
//!
//! ```rust
//! use fpkernel::compose::{identity, if_then_else};
//!
//! let label = |count: usize| if_then_else(count == 1, || "item", || "items");
//! assert_eq!(label(1), "item");
//! assert_eq!(identity(label(2)), "items");
//! ```

mod chain_macro;
mod utils;

pub use utils::{constant, flip, identity, if_then_else};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::chain;
