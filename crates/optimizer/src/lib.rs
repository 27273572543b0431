//! Deterministic reordering of extracted parts.
//!
//! Parts are sorted by `(rank, start_line)`, where the rank comes from a
//! configurable priority list (see [`promptmap_core::DEFAULT_ORDER`]) and
//! unlisted names rank last. The result can be rendered back to Markdown.

mod order;
mod render;

pub use order::{PriorityOrder, optimize_part_order};
pub use render::render_markdown;

use promptmap_core::{Part, PartsDocument};

/// Reorder the parts of a document using `order`, or the default order
/// when none is configured.
pub fn optimize_document(doc: &PartsDocument, order: Option<&[String]>) -> Vec<Part> {
    optimize_part_order(&doc.parts, &PriorityOrder::from_config(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_then_optimize_example() {
        let text = "[part:task]\nSummarize the document.\n[/part]\n## Constraints\nBe concise.\n";
        let doc = PartsDocument::new("s.md", None, promptmap_analyzer::extract_parts(text));
        let parts = optimize_document(&doc, None);
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["task", "constraints"]);
        assert_eq!(
            render_markdown(&parts),
            "## Task\n\nSummarize the document.\n\n## Constraints\n\nBe concise.\n"
        );
    }

    #[test]
    fn optimizes_into_priority_order() {
        let text = "[part:title]\nBot\n[/part]\n## Examples\nQ/A\n## Output Format\nJSON\n## Task\nAnswer.";
        let doc = PartsDocument::new("s.md", None, promptmap_analyzer::extract_parts(text));
        let names: Vec<_> = optimize_document(&doc, None)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["title", "task", "output_format", "few_shot"]);
    }

    #[test]
    fn missing_parts_optimize_to_empty() {
        let doc = PartsDocument::from_json("{}").unwrap();
        assert!(optimize_document(&doc, None).is_empty());
    }

    #[test]
    fn rendered_tags_round_trip_through_extraction() {
        let text = "[part:task]\n  Do X.\n[/part]\n[part:tools]\nsearch\n[/part]";
        let original = promptmap_analyzer::extract_parts(text);

        let rejoined: String = original
            .iter()
            .map(|p| format!("[part:{}]\n{}\n[/part]\n", p.name, p.content))
            .collect();
        let again = promptmap_analyzer::extract_parts(&rejoined);

        assert_eq!(again.len(), original.len());
        for (a, b) in original.iter().zip(&again) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.content, b.content);
            assert_eq!(b.end_line - b.start_line, 1);
        }
    }
}
