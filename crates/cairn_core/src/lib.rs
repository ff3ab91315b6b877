//! Provide the memoizing attribute primitive, the descriptor contract, and the shared DSL vocabulary for cairn.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces that both:
//! - the `cairn` builder layer uses to evaluate configuration blocks and store descriptors, and
//! - tooling (the reference generator, the CLI) uses to describe the DSL surface.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, and no registry of host types.
//! - Current scope: attribute slots ([`Attribute`]), positional argument conversion ([`Args`]), the
//!   [`Descriptor`] trait, the error taxonomy ([`DslError`]), and canonical vocabulary registries ([`lang`]).
//!
//! ## Examples
//! ```rust
//! use cairn_core::Attribute;
//!
//! let href = Attribute::new();
//! assert_eq!(href.call("a"), ["a"]);
//! assert_eq!(href.call("b"), ["a"]);
//! ```

#![deny(clippy::unwrap_used)]

pub mod attribute;
pub mod descriptor;
pub mod errors;
pub mod lang;
pub mod value;

pub use attribute::Attribute;
pub use descriptor::{Descriptor, DescriptorKind};
pub use errors::{DslError, ErrorKind};
pub use value::{Args, Value};
