//! `promptmap analyze` — Extract parts from a prompt into JSON.

use std::path::Path;

use super::{read_text, write_text};

pub async fn run(system: &Path, user: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let system_text = read_text(system)?;
    if let Some(user) = user {
        // Only checked for readability; the user prompt is not segmented.
        read_text(user)?;
    }

    let user_file = user.map(|p| p.display().to_string());
    let doc = promptmap_analyzer::analyze(
        &system.display().to_string(),
        &system_text,
        user_file.as_deref(),
    );

    write_text(out, &doc.to_json_pretty()?)?;
    println!("Wrote {} parts → {}", doc.parts.len(), out.display());
    Ok(())
}
