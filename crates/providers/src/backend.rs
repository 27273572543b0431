//! Backend resolution — turns a configured backend entry (or nothing) into
//! a concrete endpoint.

use std::collections::BTreeMap;
use std::time::Duration;

use promptmap_config::{AppConfig, BackendConfig};
use serde::Serialize;
use tracing::debug;

use crate::ProviderError;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_MODEL: &str = "local-model";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Wire dialect of an inference server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum BackendKind {
    Vllm,
    OpenAi,
    Sglang,
    Ollama,
    /// Unrecognized kind: the base URL is used as-is and requests use the
    /// OpenAI chat shape.
    Other(String),
}

impl BackendKind {
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_lowercase().as_str() {
            "vllm" => BackendKind::Vllm,
            "openai" => BackendKind::OpenAi,
            "sglang" => BackendKind::Sglang,
            "ollama" => BackendKind::Ollama,
            other => BackendKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BackendKind::Vllm => "vllm",
            BackendKind::OpenAi => "openai",
            BackendKind::Sglang => "sglang",
            BackendKind::Ollama => "ollama",
            BackendKind::Other(kind) => kind,
        }
    }

    /// Full request URL for a server rooted at `base`.
    pub fn endpoint(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            BackendKind::Vllm | BackendKind::OpenAi => format!("{base}/v1/chat/completions"),
            BackendKind::Sglang => format!("{base}/generate"),
            BackendKind::Ollama => format!("{base}/api/chat"),
            BackendKind::Other(_) => base.to_string(),
        }
    }
}

impl From<BackendKind> for String {
    fn from(kind: BackendKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A backend ready to receive requests.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedBackend {
    pub kind: BackendKind,
    pub url: String,
    pub model: String,
    #[serde(serialize_with = "serialize_secs")]
    pub timeout: Duration,
    pub headers: BTreeMap<String, String>,
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl Default for ResolvedBackend {
    fn default() -> Self {
        Self {
            kind: BackendKind::Vllm,
            url: BackendKind::Vllm.endpoint(DEFAULT_BASE_URL),
            model: DEFAULT_MODEL.into(),
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
            api_key: None,
        }
    }
}

impl ResolvedBackend {
    fn from_config(cfg: &BackendConfig) -> Self {
        let kind = BackendKind::parse(&cfg.kind);
        let base = cfg.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Self {
            url: kind.endpoint(base),
            kind,
            model: cfg.model.clone().unwrap_or_else(|| DEFAULT_MODEL.into()),
            timeout: Duration::from_millis(cfg.timeout_ms),
            headers: cfg.headers.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            api_key: cfg.api_key.clone(),
        }
    }

    /// Apply a `Key: Value` header override.
    pub fn add_header(&mut self, raw: &str) -> Result<(), ProviderError> {
        let (key, value) = parse_header(raw)?;
        self.headers.insert(key, value);
        Ok(())
    }
}

/// Find a backend by id, then by kind. Falls back to a local vLLM server.
pub fn resolve_backend(config: &AppConfig, backend: &str) -> ResolvedBackend {
    let found = config
        .backends
        .iter()
        .find(|b| b.id.as_deref() == Some(backend))
        .or_else(|| config.backends.iter().find(|b| b.kind == backend));

    match found {
        Some(cfg) => {
            debug!(backend, kind = %cfg.kind, "Resolved configured backend");
            ResolvedBackend::from_config(cfg)
        }
        None => {
            debug!(backend, "No configured backend matched, using local vLLM default");
            ResolvedBackend::default()
        }
    }
}

/// Split a `Key: Value` header at the first colon.
pub fn parse_header(raw: &str) -> Result<(String, String), ProviderError> {
    let (key, value) = raw
        .split_once(':')
        .ok_or_else(|| ProviderError::InvalidHeader(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ProviderError::InvalidHeader(raw.to_string()));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
