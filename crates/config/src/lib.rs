//! Configuration loading, validation, and defaults for promptmap.
//!
//! Loads `.promptmap.toml` from the working directory. Every section is
//! optional; a missing file yields the defaults. A few settings can be
//! overridden through `PROMPTMAP_*` environment variables.
//!
//! ```toml
//! [optimize]
//! order = ["title", "task", "constraints", "output_format"]
//!
//! [[backends]]
//! id = "local-vllm"
//! kind = "vllm"
//! base_url = "http://localhost:8000"
//! model = "qwen2.5-7b-instruct"
//! timeout_ms = 30000
//!
//! [classifier]
//! base_url = "http://localhost:11434/v1"
//! model = "llama3.1"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".promptmap.toml";

/// The root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Part reordering settings
    #[serde(default)]
    pub optimize: OptimizeConfig,

    /// Diagram output settings
    #[serde(default)]
    pub visualize: VisualizeConfig,

    /// Inference backends available to `route`
    #[serde(default)]
    pub backends: Vec<BackendConfig>,

    /// Semantic classifier endpoint
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizeConfig {
    /// Priority order of part names. `None` means the built-in default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "mermaid".into()
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

/// One inference backend, addressed by `id` or by `kind`.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `vllm`, `openai`, `sglang` or `ollama`
    #[serde(default = "default_backend_kind")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default = "default_backend_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_backend_kind() -> String {
    "vllm".into()
}
fn default_backend_timeout_ms() -> u64 {
    60_000
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// OpenAI-compatible API root (the `/chat/completions` suffix is added)
    #[serde(default = "default_classifier_url")]
    pub base_url: String,

    #[serde(default = "default_classifier_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_classifier_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_classifier_url() -> String {
    "http://localhost:8000/v1".into()
}
fn default_classifier_model() -> String {
    "local-model".into()
}
fn default_classifier_timeout_ms() -> u64 {
    120_000
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: default_classifier_url(),
            model: default_classifier_model(),
            api_key: None,
            timeout_ms: default_classifier_timeout_ms(),
        }
    }
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_ms", &self.timeout_ms)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &redact(&self.api_key))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from `./.promptmap.toml`, then apply environment
    /// variable overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let mut config = Self::load_from(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), backends = config.backends.len(), "Loaded config");
        Ok(config)
    }

    /// Path of the config file in the current working directory.
    pub fn config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Apply `PROMPTMAP_*` overrides using `lookup` to read variables.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("PROMPTMAP_CLASSIFIER_URL") {
            self.classifier.base_url = url;
        }
        if let Some(model) = lookup("PROMPTMAP_CLASSIFIER_MODEL") {
            self.classifier.model = model;
        }
        if let Some(key) = lookup("PROMPTMAP_API_KEY") {
            self.classifier.api_key = Some(key);
        }
    }

    /// The configured priority order, if any.
    pub fn optimize_order(&self) -> Option<&[String]> {
        self.optimize.order.as_deref()
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(order) = &self.optimize.order {
            for (i, name) in order.iter().enumerate() {
                if name.trim().is_empty() {
                    return Err(ConfigError::ValidationError(
                        "optimize.order must not contain empty names".into(),
                    ));
                }
                if order[..i].contains(name) {
                    tracing::warn!(name = %name, "optimize.order lists a name more than once; the last position wins");
                }
            }
        }

        for backend in &self.backends {
            if backend.timeout_ms == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "backend '{}' must have timeout_ms > 0",
                    backend.id.as_deref().unwrap_or(&backend.kind)
                )));
            }
        }

        if self.classifier.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "classifier.timeout_ms must be > 0".into(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.optimize_order().is_none());
        assert!(config.backends.is_empty());
        assert_eq!(config.visualize.format, "mermaid");
        assert_eq!(config.classifier.model, "local-model");
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/.promptmap.toml")).unwrap();
        assert!(config.optimize.order.is_none());
    }

    #[test]
    fn empty_file_returns_defaults() {
        let (_dir, path) = write_config("");
        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.optimize_order().is_none());
        assert_eq!(config.classifier.timeout_ms, 120_000);
    }

    #[test]
    fn parses_full_config() {
        let (_dir, path) = write_config(
            r#"
[optimize]
order = ["task", "title"]

[[backends]]
id = "local-vllm"
kind = "vllm"
base_url = "http://gpu-box:8000/"
model = "qwen"
timeout_ms = 5000
headers = { "X-Team" = "prompts" }

[[backends]]
kind = "ollama"

[classifier]
model = "llama3.1"
"#,
        );
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            config.optimize_order().unwrap(),
            &["task".to_string(), "title".to_string()]
        );
        assert_eq!(config.backends.len(), 2);
        assert_eq!(config.backends[0].id.as_deref(), Some("local-vllm"));
        assert_eq!(config.backends[0].headers["X-Team"], "prompts");
        assert_eq!(config.backends[1].kind, "ollama");
        assert_eq!(config.backends[1].timeout_ms, 60_000);
        assert_eq!(config.classifier.model, "llama3.1");
        assert_eq!(config.classifier.base_url, "http://localhost:8000/v1");
    }

    #[test]
    fn duplicate_order_names_are_kept() {
        let (_dir, path) = write_config("[optimize]\norder = [\"task\", \"title\", \"task\"]\n");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            config.optimize_order().unwrap(),
            ["task".to_string(), "title".to_string(), "task".to_string()].as_slice()
        );
    }

    #[test]
    fn empty_order_name_rejected() {
        let (_dir, path) = write_config("[optimize]\norder = [\"task\", \" \"]\n");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let (_dir, path) = write_config("[[backends]]\nid = \"x\"\ntimeout_ms = 0\n");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let (_dir, path) = write_config("[optimize\norder = 3");
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn overrides_apply() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            "PROMPTMAP_CLASSIFIER_MODEL" => Some("gpt-4o-mini".into()),
            "PROMPTMAP_API_KEY" => Some("sk-test".into()),
            _ => None,
        });
        assert_eq!(config.classifier.model, "gpt-4o-mini");
        assert_eq!(config.classifier.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.classifier.base_url, "http://localhost:8000/v1");
    }

    #[test]
    fn secrets_are_redacted_in_debug() {
        let mut config = AppConfig::default();
        config.classifier.api_key = Some("sk-secret".into());
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("mermaid"));
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.classifier.model, "local-model");
    }
}
