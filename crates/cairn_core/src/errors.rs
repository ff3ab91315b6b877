//! The DSL error taxonomy.
//!
//! [`ErrorKind`] is the stable identity of each failure; [`crate::lang::errors`] owns its canonical spelling and
//! documentation. [`DslError`] carries the per-occurrence details and renders as `Kind: message`, so the text a
//! caller sees matches the vocabulary reference.

use core::fmt::{self, Display};

use miette::Diagnostic;
use thiserror::Error;

use crate::descriptor::DescriptorKind;
use crate::lang;

/// Stable identifier for every DSL error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownAttribute,
    MissingBlock,
    NullDereference,
    NestedEvaluation,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(lang::errors::as_str(*self))
    }
}

/// A configuration or access failure.
///
/// All variants surface synchronously at the call site; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DslError {
    /// A block (or dynamic call) named an attribute the descriptor variant does not expose.
    #[error("{}: '{attribute}' is not an attribute of {kind} descriptors (expected one of: {expected})", ErrorKind::UnknownAttribute)]
    #[diagnostic(code(cairn::unknown_attribute), help("attribute names are case-sensitive"))]
    UnknownAttribute {
        kind: DescriptorKind,
        attribute: String,
        expected: String,
    },

    /// A builder entry point was invoked without a configuration block.
    #[error("{}: define_{kind} on {class} requires a configuration block", ErrorKind::MissingBlock)]
    #[diagnostic(code(cairn::missing_block))]
    MissingBlock { class: &'static str, kind: DescriptorKind },

    /// An undefined descriptor was dereferenced for attribute access.
    #[error("{}: {class} has no {kind} descriptor; call define_{kind} first", ErrorKind::NullDereference)]
    #[diagnostic(code(cairn::null_dereference), help("use the non-failing accessor to test for an undefined descriptor"))]
    NullDereference { class: &'static str, kind: DescriptorKind },

    /// A descriptor evaluation was started from inside a running configuration block.
    #[error("{}: {kind} block cannot start while another block is running", ErrorKind::NestedEvaluation)]
    #[diagnostic(code(cairn::nested_evaluation))]
    NestedEvaluation { kind: DescriptorKind },
}

impl DslError {
    /// Return the stable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DslError::UnknownAttribute { .. } => ErrorKind::UnknownAttribute,
            DslError::MissingBlock { .. } => ErrorKind::MissingBlock,
            DslError::NullDereference { .. } => ErrorKind::NullDereference,
            DslError::NestedEvaluation { .. } => ErrorKind::NestedEvaluation,
        }
    }
}

/// Raise an error (implemented as a panic) with its canonical `Kind: message` text.
///
/// For callers that treat a configuration error as fatal instead of propagating it.
#[cold]
#[track_caller]
pub fn raise(err: impl Display) -> ! {
    panic!("{err}");
}
