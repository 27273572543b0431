//! LLM-backed semantic classifier over an OpenAI-compatible chat endpoint.
//!
//! The model is asked to split a payload into `{category, content}` records
//! using [`TAXONOMY`]. Its reply is treated as untrusted text: the first
//! JSON array found in it is decoded leniently and anything else is an error.

use async_trait::async_trait;
use promptmap_config::ClassifierConfig;
use promptmap_core::{ClassifiedRecord, Classifier, ClassifierError, TAXONOMY, records_from_json};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

/// Classifier that calls `{base_url}/chat/completions`.
pub struct LlmClassifier {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl LlmClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClassifierError::Client(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn request_body(&self, payload: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt() },
                { "role": "user", "content": payload },
            ],
            "temperature": 0.0,
            "stream": false,
        })
    }
}

fn system_prompt() -> String {
    format!(
        "You split LLM request payloads into labeled chunks.\n\
         Use this taxonomy:\n{TAXONOMY}\n\n\
         Return only a JSON array. Each item is an object with a \"category\" \
         string (a sub-category name prefixed with its taxonomy number, e.g. \
         \"1. Persona\") and a \"content\" string holding the exact text of the chunk."
    )
}

/// Pull the record list out of a model reply, tolerating prose or code
/// fences around the JSON.
pub(crate) fn parse_reply(reply: &str) -> Result<Vec<ClassifiedRecord>, ClassifierError> {
    let (Some(start), Some(end)) = (reply.find('['), reply.rfind(']')) else {
        return Err(ClassifierError::InvalidResponse(
            "no JSON array in classifier reply".into(),
        ));
    };
    if end < start {
        return Err(ClassifierError::InvalidResponse(
            "no JSON array in classifier reply".into(),
        ));
    }
    records_from_json(&reply[start..=end])
        .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[async_trait]
impl Classifier for LlmClassifier {
    fn name(&self) -> &str {
        &self.model
    }

    async fn classify(&self, payload: &str) -> Result<Vec<ClassifiedRecord>, ClassifierError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, model = %self.model, bytes = payload.len(), "Classifying payload");

        let mut request = self.client.post(&url).json(&self.request_body(payload));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 401 || status == 403 {
            return Err(ClassifierError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }
        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Classifier returned error");
            return Err(ClassifierError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ClassifierError::InvalidResponse("No choices in response".into()))?;

        let records = parse_reply(&content)?;
        debug!(records = records.len(), "Classifier returned records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_trims_base_url() {
        let config = ClassifierConfig {
            base_url: "http://localhost:11434/v1/".into(),
            model: "llama3.1".into(),
            ..ClassifierConfig::default()
        };
        let classifier = LlmClassifier::new(&config).unwrap();
        assert_eq!(classifier.base_url, "http://localhost:11434/v1");
        assert_eq!(classifier.name(), "llama3.1");
    }

    #[test]
    fn request_carries_taxonomy_and_payload() {
        let classifier = LlmClassifier::new(&ClassifierConfig::default()).unwrap();
        let body = classifier.request_body("You are a bot.");
        assert_eq!(body["model"], "local-model");
        assert_eq!(body["messages"][1]["content"], "You are a bot.");
        let system = body["messages"][0]["content"].as_str().unwrap();
        assert!(system.contains("2. Dynamic Context"));
        assert!(system.contains("JSON array"));
    }

    #[test]
    fn parses_fenced_reply() {
        let reply = "Here you go:\n```json\n[{\"category\": \"1. Persona\", \"content\": \"You are a bot.\"}]\n```";
        let records = parse_reply(reply).unwrap();
        assert_eq!(records, vec![ClassifiedRecord::new("1. Persona", "You are a bot.")]);
    }

    #[test]
    fn missing_fields_default_in_reply() {
        let records = parse_reply(r#"[{"category": "3. Format"}, {}]"#).unwrap();
        assert_eq!(records[0].content, "");
        assert_eq!(records[1], ClassifiedRecord::default());
    }

    #[test]
    fn reply_without_array_is_invalid() {
        assert!(matches!(
            parse_reply("I cannot help with that."),
            Err(ClassifierError::InvalidResponse(_))
        ));
        assert!(parse_reply("] oops [").is_err());
        assert!(parse_reply("[not json]").is_err());
    }

    #[test]
    fn api_response_decoding() {
        let data = r#"{"choices":[{"message":{"role":"assistant","content":"[]"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let config = ClassifierConfig {
            base_url: "http://127.0.0.1:1/v1".into(),
            ..ClassifierConfig::default()
        };
        let classifier = LlmClassifier::new(&config).unwrap();
        let err = classifier.classify("hello").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Network(_)));
    }
}
