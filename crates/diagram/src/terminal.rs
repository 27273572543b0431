//! Plain-text panels for showing classified records in a terminal.

use promptmap_core::ClassifiedRecord;

const RULE_WIDTH: usize = 72;

/// One boxed panel per record: the category as title, then the trimmed
/// content with line numbers.
pub fn render_terminal(records: &[ClassifiedRecord]) -> String {
    let mut out = String::from("--- LLM Payload Semantic Analysis Results ---\n\n");

    if records.is_empty() {
        out.push_str("(no records)\n");
        return out;
    }

    for record in records {
        let category = match record.category.trim() {
            "" => "N/A",
            c => c,
        };
        let title = format!("┌─ {category} ");
        let fill = RULE_WIDTH.saturating_sub(title.chars().count());
        out.push_str(&title);
        out.push_str(&"─".repeat(fill));
        out.push('\n');

        let content = record.content.trim();
        let width = content.lines().count().max(1).to_string().len();
        for (n, line) in content.lines().enumerate() {
            out.push_str(&format!("│ {:>width$} │ {line}\n", n + 1));
        }
        out.push('└');
        out.push_str(&"─".repeat(RULE_WIDTH - 1));
        out.push_str("\n\n");
    }

    out
}
