//! The Part model — a labeled, contiguous span of prompt text.
//!
//! Part names form an open string space. The twelve names in [`PartName`]
//! carry display names and a default priority; any other name is legal and
//! simply sorts after the ranked ones.

use serde::{Deserialize, Serialize};

/// Rank given to names that are absent from a priority order.
pub const UNRANKED: usize = 999;

/// Default priority order used when no configuration overrides it.
pub const DEFAULT_ORDER: [&str; 10] = [
    "title",
    "task",
    "constraints",
    "tools",
    "output_format",
    "few_shot",
    "evaluation",
    "guardrails",
    "metadata",
    "retrieval",
];

/// Line used as the sort position of parts decoded without a `start_line`.
pub const UNKNOWN_LINE: usize = 1_000_000_000;

/// The enumerated subset of part names with known display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartName {
    Title,
    Task,
    Description,
    Constraints,
    Tools,
    OutputFormat,
    FewShot,
    Evaluation,
    Guardrails,
    Metadata,
    Retrieval,
    Other,
}

impl PartName {
    pub const ALL: [PartName; 12] = [
        PartName::Title,
        PartName::Task,
        PartName::Description,
        PartName::Constraints,
        PartName::Tools,
        PartName::OutputFormat,
        PartName::FewShot,
        PartName::Evaluation,
        PartName::Guardrails,
        PartName::Metadata,
        PartName::Retrieval,
        PartName::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartName::Title => "title",
            PartName::Task => "task",
            PartName::Description => "description",
            PartName::Constraints => "constraints",
            PartName::Tools => "tools",
            PartName::OutputFormat => "output_format",
            PartName::FewShot => "few_shot",
            PartName::Evaluation => "evaluation",
            PartName::Guardrails => "guardrails",
            PartName::Metadata => "metadata",
            PartName::Retrieval => "retrieval",
            PartName::Other => "other",
        }
    }

    /// Look up a known name. Unknown names return `None`; they are not errors.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }

    /// Heading text used when rendering this part as Markdown.
    pub fn display_name(self) -> &'static str {
        match self {
            PartName::Title => "Title",
            PartName::Task => "Task",
            PartName::Description => "Description",
            PartName::Constraints => "Constraints",
            PartName::Tools => "Tools",
            PartName::OutputFormat => "Output Format",
            PartName::FewShot => "Few-Shot Examples",
            PartName::Evaluation => "Evaluation Criteria",
            PartName::Guardrails => "Guardrails / Policy",
            PartName::Metadata => "Metadata",
            PartName::Retrieval => "Retrieval / Context",
            PartName::Other => "Other",
        }
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name for any part name, known or not.
pub fn display_name(name: &str) -> String {
    match PartName::parse(name) {
        Some(known) => known.display_name().to_string(),
        None => humanize(name),
    }
}

/// Turn a raw name into a label: underscores become spaces and every word
/// is title-cased (`output_format` → `Output Format`).
pub fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

/// Where a part came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartSource {
    /// An explicit `[part:name] ... [/part]` block.
    #[default]
    Tag,
    /// A section inferred from a recognized Markdown heading.
    Header,
}

/// A labeled span `[start_line, end_line)` of the source document.
///
/// Every field has a default so that hand-edited or partial documents still
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default = "default_name")]
    pub name: String,

    /// Trimmed text of the span.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub source: PartSource,

    #[serde(default = "unknown_line")]
    pub start_line: usize,

    #[serde(default = "unknown_line")]
    pub end_line: usize,
}

fn default_name() -> String {
    PartName::Other.as_str().into()
}

fn unknown_line() -> usize {
    UNKNOWN_LINE
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        source: PartSource,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            source,
            start_line,
            end_line,
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}
