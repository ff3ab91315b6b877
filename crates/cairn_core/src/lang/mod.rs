//! cairn DSL vocabulary registries.
//!
//! This module is the “front door” for DSL-level vocabulary: keywords (entry points and accessors), descriptor
//! attributes, and error kinds.
//!
//! The design goal is to avoid stringly-typed checks scattered across the builder and tooling. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `ErrorKind`) and look up spellings/metadata via registry tables.
//!
//! ## Examples
//! ```rust
//! use cairn_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("item"), Some(KeywordId::Item));
//! assert_eq!(keywords::as_str(KeywordId::DefineCollection), "define_collection");
//! ```
//!
//! ## See also
//! - `cargo run -p cairn_core --bin generate_dsl_reference` to generate the Markdown reference.

pub mod attributes;
pub mod errors;
pub mod keywords;
pub mod reference;
pub mod registry;
