//! Structural flow: one node per part, linked in sequence.

use promptmap_core::{Part, humanize};

use crate::graph::{Direction, Flowchart};

/// Left-to-right flow of the parts in their given order.
///
/// Nodes are `p0..pN` labeled `"<position>. <Name>"`. An empty list yields a
/// single placeholder node so the diagram is always valid.
pub fn parts_to_mermaid(parts: &[Part]) -> String {
    let mut chart = Flowchart::new(Direction::LeftRight);

    if parts.is_empty() {
        chart.node("empty", "No parts found");
        return chart.to_mermaid();
    }

    for (i, part) in parts.iter().enumerate() {
        chart.node(format!("p{i}"), format!("{}. {}", i + 1, humanize(&part.name)));
    }
    for i in 1..parts.len() {
        chart.edge(format!("p{}", i - 1), format!("p{i}"));
    }

    chart.to_mermaid()
}
