//! Semantic tree: classified records hung under a fixed three-branch root.
//!
//! ```text
//! root ─┬─ static_ctx  (1. Static Context)  ── leaves with category "1. ..."
//!       ├─ dynamic_ctx (2. Dynamic Context) ── leaves with category "2. ..."
//!       ├─ output_ctl  (3. Output Control)  ── leaves with category "3. ..."
//!       └─ leaves with any other category
//! ```

use promptmap_core::ClassifiedRecord;
use tracing::debug;

use crate::graph::{Direction, Flowchart, preview};

/// Characters of content shown in a leaf label.
pub const PREVIEW_CHARS: usize = 80;

pub const ROOT_ID: &str = "root";

/// Top-level branch of the taxonomy a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Static,
    Dynamic,
    Output,
    /// Unclassified material, attached directly to the root.
    Root,
}

impl Branch {
    pub const TAXONOMY: [Branch; 3] = [Branch::Static, Branch::Dynamic, Branch::Output];

    /// Pick the branch from a category's numeric prefix.
    pub fn of(category: &str) -> Self {
        let category = category.trim_start();
        if category.starts_with("1.") {
            Branch::Static
        } else if category.starts_with("2.") {
            Branch::Dynamic
        } else if category.starts_with("3.") {
            Branch::Output
        } else {
            Branch::Root
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Branch::Static => "static_ctx",
            Branch::Dynamic => "dynamic_ctx",
            Branch::Output => "output_ctl",
            Branch::Root => ROOT_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::Static => "1. Static Context",
            Branch::Dynamic => "2. Dynamic Context",
            Branch::Output => "3. Output Control",
            Branch::Root => "LLM Payload",
        }
    }
}

/// Top-down tree of classified records. Leaf ids are `n0..nN` in input
/// order and never collide with the root or branch ids.
pub fn classified_to_mermaid(records: &[ClassifiedRecord]) -> String {
    let mut chart = Flowchart::new(Direction::TopDown);

    chart.node(ROOT_ID, Branch::Root.label());
    for branch in Branch::TAXONOMY {
        chart.node(branch.id(), branch.label());
    }
    for branch in Branch::TAXONOMY {
        chart.edge(ROOT_ID, branch.id());
    }

    for (i, record) in records.iter().enumerate() {
        let id = format!("n{i}");
        let label = format!(
            "{}<br/>{}",
            record.category.trim(),
            preview(&record.content, PREVIEW_CHARS)
        );
        chart.node(&id, label);
        chart.edge(Branch::of(&record.category).id(), id);
    }

    debug!(records = records.len(), "Rendered semantic diagram");
    chart.to_mermaid()
}
