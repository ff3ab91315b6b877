//! Generate the Markdown DSL reference from `cairn_core::lang` registries.
//!
//! Writes `docs/reference/dsl.md` under the workspace root.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p cairn_core --bin generate_dsl_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use cairn_core::lang::reference;

fn main() {
    let out_dir = workspace_root().join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    let mut doc = reference::render_markdown().trim_end().to_string();
    doc.push('\n');
    fs::write(out_dir.join("dsl.md"), doc).expect("write dsl.md");
}

fn workspace_root() -> PathBuf {
    // crates/cairn_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/cairn_core)")
}
