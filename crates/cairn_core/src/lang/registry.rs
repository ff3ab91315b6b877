//! Shareable metadata for `cairn_core::lang` registries.
//!
//! The `cairn_core::lang` module is a set of **registry-first** vocabularies: DSL keywords, descriptor attributes,
//! and error kinds. This submodule provides the small, dependency-free metadata types reused across all of them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; dispatch still lives in the descriptor implementations.
//!
//! ## See also
//! - [`crate::lang::keywords`]
//! - [`crate::lang::attributes`]
//! - [`crate::lang::errors`]

/// Identify the crate version a vocabulary item is available since.
///
/// ## Examples
/// ```rust
/// use cairn_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.1.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// The first released version; every current vocabulary item dates from it.
pub const INITIAL: SinceVersion = "0.1.0";

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, written as Rust using the cairn macros.
/// - `note` is an optional short explanation (one or two sentences).
///
/// ## Examples
/// ```rust
/// use cairn_core::lang::registry::Example;
///
/// let ex = Example {
///     code: "define_item!(Widgets { href(\"/w/1\") })?;",
///     note: Some("Minimal item definition."),
/// };
/// assert!(ex.code.contains("href"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Every vocabulary shares:
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
///
/// Registries that need extra per-item data (keyword category, attribute kinds) wrap this struct in an
/// “extension” info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: SinceVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}
