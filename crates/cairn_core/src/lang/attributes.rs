//! Descriptor attribute vocabulary.
//!
//! Documents every attribute name the built-in descriptor variants expose. Which variant exposes which attribute is
//! not recorded here: the descriptor structs are the only source for that, and a guardrail test checks that every
//! name they generate has an entry in this table.
//!
//! ## Examples
//! ```rust
//! use cairn_core::lang::attributes::{self, AttributeId};
//!
//! assert_eq!(attributes::from_str("href"), Some(AttributeId::Href));
//! assert_eq!(attributes::as_str(AttributeId::Href), "href");
//! ```

use super::registry::{Example, INITIAL, LangItemInfo, Stability};

/// Stable identifier for every descriptor attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeId {
    Href,
}

/// Metadata for an attribute.
pub type AttributeInfo = LangItemInfo<AttributeId>;

/// Registry of descriptor attributes.
pub const ATTRIBUTES: &[AttributeInfo] = &[LangItemInfo {
    id: AttributeId::Href,
    canonical: "href",
    aliases: &[],
    description: "Variadic, memoizing link target. The first call fixes the value sequence; later calls return it.",
    since_version: INITIAL,
    stability: Stability::Stable,
    examples: &[Example {
        code: r#"define_item!(Widgets { href("x", "y") })?;
assert_eq!(Widgets.require_item()?.href("z"), ["x", "y"]);
"#,
        note: Some("Arguments passed after the value is fixed are ignored."),
    }],
}];

/// Canonical spelling of an attribute.
pub fn as_str(id: AttributeId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata for an attribute.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: AttributeId) -> &'static AttributeInfo {
    ATTRIBUTES
        .iter()
        .find(|a| a.id == id)
        .expect("INVARIANT: every AttributeId has a registry entry")
}

/// Lookup by spelling (canonical or alias). Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<AttributeId> {
    ATTRIBUTES
        .iter()
        .find(|a| a.canonical == name || a.aliases.contains(&name))
        .map(|a| a.id)
}
