//! `promptmap visualize` — Draw the part flow as a diagram.

use std::path::Path;

use promptmap_diagram::{DiagramFormat, parts_to_mermaid};

use super::{load_config, load_parts, write_text};

pub async fn run(parts: &Path, format: Option<&str>, out: &Path) -> anyhow::Result<()> {
    let format: DiagramFormat = match format {
        Some(f) => f.parse()?,
        None => load_config()?.visualize.format.parse()?,
    };

    let doc = load_parts(parts)?;
    let diagram = match format {
        DiagramFormat::Mermaid => parts_to_mermaid(&doc.parts),
    };

    write_text(out, &diagram)?;
    println!("Wrote mermaid diagram → {}", out.display());
    Ok(())
}
