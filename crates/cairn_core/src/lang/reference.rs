//! Render the vocabulary registries as a Markdown reference.
//!
//! Used by the `generate_dsl_reference` binary (which writes `docs/reference/dsl.md`) and by tests that pin the
//! rendered shape. Do not edit the generated Markdown by hand; update the registries instead.

use std::fmt::Write as _;

use super::registry::Example;
use super::{attributes, errors, keywords};

/// Render the full DSL reference document.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# cairn DSL reference\n\n");
    out.push_str("> Generated file. Regenerate with `cargo run -p cairn_core --bin generate_dsl_reference`.\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Keywords](#keywords)\n");
    out.push_str("- [Attributes](#attributes)\n");
    out.push_str("- [Errors](#errors)\n");

    render_keywords_section(&mut out);
    render_attributes_section(&mut out);
    render_errors_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    out
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count.max(2) {
        out.pop();
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

fn render_examples(out: &mut String, heading: &str, examples: &[Example]) {
    if examples.is_empty() {
        return;
    }
    // Writing to a String cannot fail.
    let _ = writeln!(out, "#### `{heading}`\n");
    for ex in examples {
        out.push_str("```rust\n");
        out.push_str(ex.code.trim_end());
        out.push_str("\n```\n\n");
        if let Some(note) = ex.note {
            out.push_str(note);
            out.push_str("\n\n");
        }
    }
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Keywords");

    out.push_str("| Id | Canonical | Category | Kind | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for k in keywords::KEYWORDS {
        let _ = writeln!(
            out,
            "| {:?} | `{}` | {} | {} | {} | {} | {:?} |",
            k.id,
            k.canonical,
            k.category.as_str(),
            k.kind,
            k.description,
            k.since,
            k.stability
        );
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    for k in keywords::KEYWORDS {
        render_examples(out, k.canonical, k.examples);
    }
}

fn render_attributes_section(out: &mut String) {
    start_section(out, "## Attributes");

    out.push_str("| Id | Canonical | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|\n");
    for a in attributes::ATTRIBUTES {
        let _ = writeln!(
            out,
            "| {:?} | `{}` | {} | {} | {:?} |",
            a.id, a.canonical, a.description, a.since_version, a.stability
        );
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    for a in attributes::ATTRIBUTES {
        render_examples(out, a.canonical, a.examples);
    }
}

fn render_errors_section(out: &mut String) {
    start_section(out, "## Errors");

    out.push_str("| Id | Canonical | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|\n");
    for e in errors::ERROR_KINDS {
        let _ = writeln!(
            out,
            "| {:?} | `{}` | {} | {} | {:?} |",
            e.id, e.canonical, e.description, e.since_version, e.stability
        );
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    for e in errors::ERROR_KINDS {
        render_examples(out, e.canonical, e.examples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_to_at_most_two_newlines() {
        let mut s = String::from("x\n\n\n\n");
        trim_trailing_newlines_to_at_most_two(&mut s);
        assert_eq!(s, "x\n\n");

        let mut s = String::from("x\n");
        trim_trailing_newlines_to_at_most_two(&mut s);
        assert_eq!(s, "x\n");
    }

    #[test]
    fn sections_start_after_one_blank_line() {
        let mut s = String::from("intro");
        start_section(&mut s, "## Next");
        assert_eq!(s, "intro\n\n## Next\n\n");
    }

    #[test]
    fn document_lists_every_registry_entry() {
        let doc = render_markdown();
        for k in keywords::KEYWORDS {
            assert!(doc.contains(&format!("`{}`", k.canonical)), "missing keyword {}", k.canonical);
        }
        for a in attributes::ATTRIBUTES {
            assert!(doc.contains(&format!("`{}`", a.canonical)));
        }
        for e in errors::ERROR_KINDS {
            assert!(doc.contains(&format!("`{}`", e.canonical)));
        }
        assert!(doc.ends_with("```\n\n") || doc.ends_with(".\n\n"));
    }
}
