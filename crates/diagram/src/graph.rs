//! A minimal flowchart model and its Mermaid serialization.
//!
//! Renderers build a [`Flowchart`] and call [`Flowchart::to_mermaid`], so
//! every output is syntactically closed regardless of input.

/// Flow direction of the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    LeftRight,
    TopDown,
}

impl Direction {
    fn header(self) -> &'static str {
        match self {
            Direction::LeftRight => "flowchart LR",
            Direction::TopDown => "graph TD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// Nodes and edges in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Flowchart {
    pub direction: Direction,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Flowchart {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Declare a node. The label is escaped on output, not here.
    pub fn node(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.nodes.push(Node {
            id: id.into(),
            label: label.into(),
        });
    }

    pub fn edge(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
        });
    }

    /// One statement per line: header, node declarations, then edges.
    pub fn to_mermaid(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.nodes.len() + self.edges.len());
        lines.push(self.direction.header().to_string());
        for node in &self.nodes {
            lines.push(format!("  {}[\"{}\"]", node.id, escape_label(&node.label)));
        }
        for edge in &self.edges {
            lines.push(format!("  {} --> {}", edge.from, edge.to));
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Make text safe inside a quoted Mermaid label: quotes become `#quot;`
/// and line breaks become spaces.
pub fn escape_label(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('"', "#quot;")
}

/// First `max_chars` characters of `text` with whitespace runs collapsed,
/// followed by `...` when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_header_nodes_edges() {
        let mut chart = Flowchart::new(Direction::LeftRight);
        chart.node("a", "First");
        chart.node("b", "Second");
        chart.edge("a", "b");
        assert_eq!(
            chart.to_mermaid(),
            "flowchart LR\n  a[\"First\"]\n  b[\"Second\"]\n  a --> b\n"
        );
    }

    #[test]
    fn top_down_header() {
        assert_eq!(Flowchart::new(Direction::TopDown).to_mermaid(), "graph TD\n");
    }

    #[test]
    fn escape_quotes_and_newlines() {
        assert_eq!(escape_label(r#"say "hi""#), "say #quot;hi#quot;");
        assert_eq!(escape_label("a\nb\r\nc"), "a b c");
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("  many\n\n  spaces ", 20), "many spaces");
        assert_eq!(preview("abcdefghij", 4), "abcd...");
        assert_eq!(preview("ééééé", 3), "ééé...");
    }
}
