//! Markdown rendering of an ordered part list.

use promptmap_core::Part;

/// Render parts as `## <Display Name>` sections in the given order.
///
/// Sections are separated by one blank line and the output ends with
/// exactly one newline.
pub fn render_markdown(parts: &[Part]) -> String {
    let sections: Vec<String> = parts
        .iter()
        .map(|p| format!("## {}\n\n{}\n", p.display_name(), p.content.trim()))
        .collect();
    let mut out = sections.join("\n").trim().to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptmap_core::PartSource;

    #[test]
    fn renders_sections_with_display_names() {
        let parts = vec![
            Part::new("task", "Summarize.", PartSource::Tag, 1, 2),
            Part::new("few_shot", "  Q: a\nA: b  ", PartSource::Header, 4, 6),
        ];
        assert_eq!(
            render_markdown(&parts),
            "## Task\n\nSummarize.\n\n## Few-Shot Examples\n\nQ: a\nA: b\n"
        );
    }

    #[test]
    fn unknown_names_are_humanized() {
        let parts = vec![Part::new("user_persona", "A pirate.", PartSource::Tag, 0, 1)];
        assert_eq!(render_markdown(&parts), "## User Persona\n\nA pirate.\n");
    }

    #[test]
    fn empty_list_renders_single_newline() {
        assert_eq!(render_markdown(&[]), "\n");
    }

    #[test]
    fn empty_content_keeps_heading() {
        let parts = vec![
            Part::new("title", "", PartSource::Tag, 0, 0),
            Part::new("task", "Go.", PartSource::Tag, 2, 3),
        ];
        assert_eq!(render_markdown(&parts), "## Title\n\n\n\n## Task\n\nGo.\n");
    }
}
