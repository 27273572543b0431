//! `promptmap optimize` — Reorder parts by priority and render Markdown.

use std::path::Path;

use promptmap_optimizer::{optimize_document, render_markdown};

use super::{load_config, load_parts, write_text};

pub async fn run(parts: &Path, out: &Path) -> anyhow::Result<()> {
    let config = load_config()?;
    let doc = load_parts(parts)?;

    let ordered = optimize_document(&doc, config.optimize_order());
    write_text(out, &render_markdown(&ordered))?;

    println!("Wrote optimized system prompt → {}", out.display());
    Ok(())
}
