//! `promptmap analyze-semantic` — Classify a payload and draw its semantic tree.

use std::path::Path;

use anyhow::Context;
use promptmap_core::{Classifier, records_from_json};
use promptmap_diagram::{classified_to_mermaid, render_terminal};
use promptmap_providers::LlmClassifier;
use tracing::info;

use super::{load_config, read_text, write_text};

pub async fn run(payload: &Path, out: &Path, records: Option<&Path>) -> anyhow::Result<()> {
    let payload_text = read_text(payload)?;

    let classified = match records {
        Some(path) => {
            let json = read_text(path)?;
            records_from_json(&json)
                .with_context(|| format!("Invalid records file {}", path.display()))?
        }
        None => {
            let config = load_config()?;
            let classifier = LlmClassifier::new(&config.classifier)?;
            info!(
                file = %payload.display(),
                classifier = classifier.name(),
                "Analyzing payload semantically"
            );
            classifier.classify(&payload_text).await?
        }
    };

    print!("{}", render_terminal(&classified));

    write_text(out, &classified_to_mermaid(&classified))?;
    println!("Mermaid diagram saved to '{}'", out.display());
    Ok(())
}
