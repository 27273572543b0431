//! Part extraction for structured prompt documents.
//!
//! A prompt is split into named, non-overlapping parts by two passes:
//!
//! 1. **Tag blocks** — explicit `[part:<name>] ... [/part]` regions. These
//!    run first and win every conflict.
//! 2. **Heading sections** — `## Task`, `## Constraints`, `## Output Format`
//!    and `## Few-Shot` / `## Examples` headings (levels 2–3), each running
//!    to the next recognized heading or end of file. A section that
//!    overlaps any tag block is dropped entirely.
//!
//! Extraction is total: malformed markers simply fail to match.
//!
//! # Example
//!
//! ```
//! let parts = promptmap_analyzer::extract_parts(
//!     "[part:task]\nSummarize the document.\n[/part]\n## Constraints\nBe concise.\n",
//! );
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0].name, "task");
//! assert_eq!(parts[1].name, "constraints");
//! ```

mod extract;
mod span;

pub use extract::extract_parts;
pub use span::{Span, overlaps_any};

use promptmap_core::PartsDocument;
use tracing::info;

/// Analyze a system prompt and wrap the result in a [`PartsDocument`].
///
/// Only the system prompt is segmented; the user prompt path is recorded
/// for provenance.
pub fn analyze(system_file: &str, system_text: &str, user_file: Option<&str>) -> PartsDocument {
    let parts = extract_parts(system_text);
    info!(file = system_file, parts = parts.len(), "Analyzed prompt");
    PartsDocument::new(system_file, user_file.map(str::to_string), parts)
}
