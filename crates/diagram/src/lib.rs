//! Diagram rendering for promptmap.
//!
//! Two independent renderers produce Mermaid text:
//!
//! - [`parts_to_mermaid`] — structural flow of extracted parts, in order.
//! - [`classified_to_mermaid`] — semantic tree of externally classified
//!   records under a fixed three-branch taxonomy.
//!
//! Both are total: empty or partial input still yields a closed diagram.
//! [`render_terminal`] gives a plain-text view of classified records.

mod graph;
mod semantic;
mod structural;
mod terminal;

pub use graph::{Direction, Edge, Flowchart, Node, escape_label, preview};
pub use semantic::{Branch, PREVIEW_CHARS, classified_to_mermaid};
pub use structural::parts_to_mermaid;
pub use terminal::render_terminal;

use std::str::FromStr;

/// Supported diagram output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiagramFormat {
    #[default]
    Mermaid,
}

/// Errors from the diagram layer.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    #[error("unsupported diagram format '{0}' (supported: mermaid)")]
    UnsupportedFormat(String),
}

impl FromStr for DiagramFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mermaid" | "mmd" => Ok(DiagramFormat::Mermaid),
            other => Err(DiagramError::UnsupportedFormat(other.to_string())),
        }
    }
}
