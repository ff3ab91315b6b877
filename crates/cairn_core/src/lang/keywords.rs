//! Define the keyword vocabulary of the descriptor DSL.
//!
//! This module is the single source of truth for the DSL's entry points and accessors: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings, categories, the
//! descriptor kind each keyword addresses, and examples.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no IO/side effects). The macros and the `Builder` trait own the
//!   behavior; this table describes it.
//!
//! ## Examples
//! ```rust
//! use cairn_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("define_item"), Some(KeywordId::DefineItem));
//! assert_eq!(keywords::as_str(KeywordId::Collection), "collection");
//! ```

use crate::descriptor::DescriptorKind;

use super::registry::{Example, INITIAL, SinceVersion, Stability};

/// Stable identifier for every DSL keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Builder entry points
    DefineItem,
    DefineCollection,

    // Instance accessors
    Item,
    Collection,
    RequireItem,
    RequireCollection,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Host-level operation that evaluates a block and stores the descriptor.
    BuilderEntry,
    /// Instance-level read of the stored descriptor.
    Accessor,
}

impl KeywordCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::BuilderEntry => "builder entry point",
            KeywordCategory::Accessor => "instance accessor",
        }
    }
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is both the macro name (for builder entries) and the trait method name.
/// - `examples` are intended for generated documentation; keep them small and focused.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub kind: DescriptorKind,
    pub description: &'static str,
    pub since: SinceVersion,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all DSL keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        examples: &[Example {
            code: r#"define_item!(Widgets {
    href("item-href")
})?;
"#,
            note: None,
        }],
        ..info(
            KeywordId::DefineItem,
            "define_item",
            KeywordCategory::BuilderEntry,
            DescriptorKind::Item,
            "Evaluate a block against a fresh item descriptor and store it for the host, replacing any previous one.",
        )
    },
    KeywordInfo {
        examples: &[Example {
            code: r#"define_collection!(Widgets {
    href("collection-href")
})?;
"#,
            note: None,
        }],
        ..info(
            KeywordId::DefineCollection,
            "define_collection",
            KeywordCategory::BuilderEntry,
            DescriptorKind::Collection,
            "Evaluate a block against a fresh collection descriptor and store it for the host, replacing any previous one.",
        )
    },
    info(
        KeywordId::Item,
        "item",
        KeywordCategory::Accessor,
        DescriptorKind::Item,
        "Return the host's shared item descriptor, or `None` before `define_item` ran.",
    ),
    info(
        KeywordId::Collection,
        "collection",
        KeywordCategory::Accessor,
        DescriptorKind::Collection,
        "Return the host's shared collection descriptor, or `None` before `define_collection` ran.",
    ),
    info(
        KeywordId::RequireItem,
        "require_item",
        KeywordCategory::Accessor,
        DescriptorKind::Item,
        "Return the host's item descriptor, failing with `NullDereference` if it was never defined.",
    ),
    info(
        KeywordId::RequireCollection,
        "require_collection",
        KeywordCategory::Accessor,
        DescriptorKind::Collection,
        "Return the host's collection descriptor, failing with `NullDereference` if it was never defined.",
    ),
];

/// Canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category of a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    kind: DescriptorKind,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        kind,
        description,
        since: INITIAL,
        stability: Stability::Stable,
        examples: &[],
    }
}
