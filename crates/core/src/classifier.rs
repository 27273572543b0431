//! Classifier trait — the seam to an external semantic classifier.
//!
//! A classifier receives a whole prompt payload and returns an ordered list
//! of `{category, content}` records. Its output is untrusted: records are
//! validated only structurally and missing fields become empty strings.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ClassifierError;

/// Taxonomy handed to classifiers. The numeric prefixes are what the
/// semantic diagram uses to pick a branch.
pub const TAXONOMY: &str = "\
1. Static Context: system instructions, persona, rules, tool definitions and other \
content that does not change between requests.
2. Dynamic Context: conversation history, retrieved documents, user input and other \
per-request material.
3. Output Control: output format, response schema, length limits and other \
instructions that shape the answer.";

/// One labeled chunk of a payload, as returned by a classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub content: String,
}

impl ClassifiedRecord {
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }

    /// Build a record from an arbitrary JSON item. Non-string or missing
    /// fields become empty strings; non-object items become empty records.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            category: field("category"),
            content: field("content"),
        }
    }
}

/// Decode classifier output leniently.
///
/// A top-level array yields one record per item. An object carrying a
/// `records` array is unwrapped. Anything else is an empty list.
pub fn records_from_json(json: &str) -> crate::Result<Vec<ClassifiedRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items: &[serde_json::Value] = match &value {
        serde_json::Value::Array(items) => items.as_slice(),
        serde_json::Value::Object(map) => match map.get("records") {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => {
                warn!("Classifier output has no record list, treating as empty");
                &[]
            }
        },
        _ => {
            warn!("Classifier output is not a list, treating as empty");
            &[]
        }
    };
    Ok(items.iter().map(ClassifiedRecord::from_value).collect())
}

/// An external semantic classifier.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Split `payload` into categorized records.
    async fn classify(&self, payload: &str) -> Result<Vec<ClassifiedRecord>, ClassifierError>;
}
