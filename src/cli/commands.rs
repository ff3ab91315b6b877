//! CLI command implementations
//!
//! Each command renders its output into a `String`; `cli::run` prints it.

use std::fmt::Write as _;

use cairn_core::DescriptorKind;
use cairn_core::lang::{errors, keywords, reference};

use super::{CliError, CliResult};
use crate::descriptors;

/// Describe the error kind spelled `name`.
///
/// ## Errors
///
/// Returns an error if `name` is not a canonical error kind spelling.
pub fn explain(name: &str) -> CliResult<String> {
    let Some(kind) = errors::from_str(name) else {
        let known: Vec<_> = errors::ERROR_KINDS.iter().map(|e| e.canonical).collect();
        return Err(CliError::failure(format!(
            "Unknown error kind '{}'. Known kinds: {}",
            name,
            known.join(", ")
        )));
    };

    let info = errors::info_for(kind);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}\n\n{}", info.canonical, info.description);
    for ex in info.examples {
        let _ = writeln!(out, "\n    {}", ex.code.trim_end().replace('\n', "\n    "));
        if let Some(note) = ex.note {
            let _ = writeln!(out, "\n{note}");
        }
    }
    Ok(out)
}

/// List keywords by category and the attributes each descriptor kind exposes.
pub fn vocab() -> String {
    let mut out = String::from("Keywords:\n");
    for k in keywords::KEYWORDS {
        let _ = writeln!(out, "  {:<20} {} ({})", k.canonical, k.category.as_str(), k.kind);
    }

    out.push_str("\nAttributes:\n");
    for kind in DescriptorKind::ALL {
        let _ = writeln!(out, "  {:<20} {}", kind.as_str(), descriptors::attribute_names(kind).join(", "));
    }
    out
}

/// Render the Markdown DSL reference.
pub fn reference() -> String {
    let mut doc = reference::render_markdown().trim_end().to_string();
    doc.push('\n');
    doc
}
