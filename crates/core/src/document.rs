//! The persisted analysis result exchanged between pipeline stages.

use serde::{Deserialize, Serialize};

use crate::part::Part;

/// Output of `analyze`, input of `optimize` and `visualize`.
///
/// ```json
/// { "system_file": "system.md", "user_file": null, "parts": [ ... ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsDocument {
    #[serde(default)]
    pub system_file: String,

    #[serde(default)]
    pub user_file: Option<String>,

    /// Missing `parts` decodes as an empty sequence.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl PartsDocument {
    pub fn new(system_file: impl Into<String>, user_file: Option<String>, parts: Vec<Part>) -> Self {
        Self {
            system_file: system_file.into(),
            user_file,
            parts,
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
