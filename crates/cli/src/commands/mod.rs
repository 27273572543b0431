pub mod analyze;
pub mod dry_run;
pub mod optimize;
pub mod route;
pub mod semantic;
pub mod visualize;

use std::path::Path;

use anyhow::Context;
use promptmap_config::AppConfig;
use promptmap_core::PartsDocument;

pub(crate) fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub(crate) fn write_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

pub(crate) fn load_parts(path: &Path) -> anyhow::Result<PartsDocument> {
    let json = read_text(path)?;
    PartsDocument::from_json(&json).with_context(|| format!("Invalid parts file {}", path.display()))
}

pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    AppConfig::load().context("Failed to load config")
}
