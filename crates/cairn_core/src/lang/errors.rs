//! DSL error vocabulary.
//!
//! This registry exists so docs/tooling (`cairn explain`, the generated reference) can treat error kind names as
//! part of the DSL vocabulary, and so [`crate::DslError`] renders with the same canonical spellings.

use crate::errors::ErrorKind;

use super::registry::{Example, INITIAL, LangItemInfo, Stability};

/// Metadata for an error kind.
pub type ErrorKindInfo = LangItemInfo<ErrorKind>;

/// Registry of error kinds.
pub const ERROR_KINDS: &[ErrorKindInfo] = &[
    info(
        ErrorKind::UnknownAttribute,
        "UnknownAttribute",
        "Raised when a configuration block calls an attribute the descriptor variant does not expose.",
        &[Example {
            code: r#"define_item!(Widgets {
    title("Widgets")
})?;
"#,
            note: Some("Fails with `UnknownAttribute: 'title' is not an attribute of item descriptors (expected one of: href)`."),
        }],
    ),
    info(
        ErrorKind::MissingBlock,
        "MissingBlock",
        "Raised when a builder entry point is invoked without a configuration block.",
        &[Example {
            code: "define_collection!(Widgets)?;\n",
            note: Some("Fails with `MissingBlock: define_collection on Widgets requires a configuration block`."),
        }],
    ),
    info(
        ErrorKind::NullDereference,
        "NullDereference",
        "Raised when attributes are read through a descriptor slot that was never defined.",
        &[Example {
            code: r#"let widgets = Widgets;
assert!(widgets.collection().is_none());
widgets.require_collection()?.href(());
"#,
            note: Some("The plain accessor returns `None`; `require_collection` fails with `NullDereference`."),
        }],
    ),
    info(
        ErrorKind::NestedEvaluation,
        "NestedEvaluation",
        "Raised when a configuration block starts another descriptor evaluation before it has finished.",
        &[Example {
            code: r#"define_item!(Widgets {
    href(define_collection!(Widgets { href("/w") }).is_ok())
})?;
"#,
            note: Some("The inner definition fails with `NestedEvaluation`; blocks run one at a time."),
        }],
    ),
];

/// Return the canonical spelling for an error kind (e.g. `"UnknownAttribute"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an error kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Return the documentation examples for an error kind.
#[inline]
pub fn examples(kind: ErrorKind) -> &'static [Example] {
    info_for(kind).examples
}

/// Resolve a spelling to an error kind.
///
/// Matching is case-sensitive.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    if let Some(e) = ERROR_KINDS.iter().find(|e| e.canonical == name) {
        return Some(e.id);
    }
    ERROR_KINDS.iter().find(|e| e.aliases.contains(&name)).map(|e| e.id)
}

/// Return full metadata for an error kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (programming error).
pub fn info_for(kind: ErrorKind) -> &'static ErrorKindInfo {
    ERROR_KINDS
        .iter()
        .find(|e| e.id == kind)
        .expect("INVARIANT: every ErrorKind has a registry entry")
}

const fn info(
    id: ErrorKind,
    canonical: &'static str,
    description: &'static str,
    examples: &'static [Example],
) -> ErrorKindInfo {
    LangItemInfo {
        id,
        canonical,
        aliases: &[],
        description,
        since_version: INITIAL,
        stability: Stability::Stable,
        examples,
    }
}
