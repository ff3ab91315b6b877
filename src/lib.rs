#![forbid(unsafe_code)]
//! cairn: class-scoped descriptors built from configuration blocks
//!
//! A host type implements [`Builder`] and declares its `item` and `collection` descriptors with
//! [`define_item!`] and [`define_collection!`]. Inside a block, unqualified attribute calls such as
//! `href("...")` write into a fresh descriptor; the finished descriptor is stored for the host type and shared by
//! every instance through [`Builder::item`] and [`Builder::collection`].
//!
//! Attributes are memoizing: the first call fixes the value sequence, later calls return it unchanged whatever
//! arguments they pass.
//!
//! ```rust
//! use cairn::{Builder, define_collection, define_item};
//!
//! struct Widgets;
//! impl Builder for Widgets {}
//!
//! define_item!(Widgets { href("item-href") }).unwrap();
//! define_collection!(Widgets { href("collection-href") }).unwrap();
//!
//! let widgets = Widgets;
//! assert_eq!(widgets.item().unwrap().href(()), ["item-href"]);
//! assert_eq!(widgets.collection().unwrap().href("ignored"), ["collection-href"]);
//! ```
//!
//! ## Panic Policy
//!
//! - **Library code**: errors are returned as [`DslError`]; `#![deny(clippy::unwrap_used)]` applies here and in
//!   `cli`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Fatal configuration**: callers that prefer a panic use [`cairn_core::errors::raise`], which keeps the
//!   canonical `Kind: message` text.

#![deny(clippy::unwrap_used)]

// Lets `#[derive(Descriptor)]` output, which names `::cairn`, resolve inside this crate too.
extern crate self as cairn;

pub mod builder;
pub mod cli;
pub mod descriptors;
pub mod evaluator;
pub mod logging;
mod macros;

pub use builder::{Builder, ClassDefinitions, SlotState};
pub use descriptors::{CollectionDescriptor, ItemDescriptor};
pub use evaluator::{Scope, evaluate};
pub use logging::LogConfig;

pub use cairn_core::{Args, Attribute, Descriptor, DescriptorKind, DslError, ErrorKind, Value};
pub use cairn_derive::Descriptor;

/// Items the `Descriptor` derive expands to. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::descriptors::call_typed;
    pub use cairn_core::{Args, Attribute, Descriptor, DescriptorKind, Value};
}
