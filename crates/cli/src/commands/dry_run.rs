//! `promptmap dry-run` — Preview the prompts without sending requests.

use std::path::Path;

use super::read_text;

const PREVIEW_CHARS: usize = 600;

pub async fn run(system: &Path, user: &Path) -> anyhow::Result<()> {
    let system_text = read_text(system)?;
    let user_text = read_text(user)?;

    println!("System prompt preview:\n{}", head(&system_text, PREVIEW_CHARS));
    println!("\nUser prompt preview:\n{}", head(&user_text, PREVIEW_CHARS));
    Ok(())
}

fn head(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
