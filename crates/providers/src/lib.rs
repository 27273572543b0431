//! Inference backends and the LLM classifier for promptmap.
//!
//! - [`resolve_backend`] picks a configured backend by id or kind.
//! - [`build_request`] renders the JSON body in the backend's dialect
//!   (OpenAI/vLLM chat, SGLang generate, Ollama chat).
//! - [`send_request`] dispatches it over HTTP.
//! - [`LlmClassifier`] implements [`promptmap_core::Classifier`] against an
//!   OpenAI-compatible endpoint.

pub mod backend;
pub mod classifier;
pub mod client;
pub mod request;

pub use backend::{BackendKind, ResolvedBackend, parse_header, resolve_backend};
pub use classifier::LlmClassifier;
pub use client::send_request;
pub use request::build_request;

/// Errors from building or dispatching backend requests.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid header '{0}': expected 'Key: Value'")]
    InvalidHeader(String),

    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("Backend returned an unreadable response: {0}")]
    InvalidResponse(String),
}
