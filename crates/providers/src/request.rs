//! Request payloads for each backend dialect.

use serde_json::{Value, json};

use crate::backend::{BackendKind, ResolvedBackend};

/// Build the JSON body for sending `system` + `user` to `backend`.
pub fn build_request(
    system: &str,
    user: &str,
    backend: &ResolvedBackend,
    stream: bool,
    max_tokens: u32,
) -> Value {
    match backend.kind {
        BackendKind::Sglang => json!({
            "model": backend.model,
            "prompt": format!("{system}\n\n{user}"),
            "stream": stream,
            "max_new_tokens": max_tokens,
        }),
        BackendKind::Ollama => json!({
            "model": backend.model,
            "messages": chat_messages(system, user),
            "stream": stream,
            "options": { "num_predict": max_tokens },
        }),
        BackendKind::Vllm | BackendKind::OpenAi | BackendKind::Other(_) => json!({
            "model": backend.model,
            "messages": chat_messages(system, user),
            "stream": stream,
            "max_tokens": max_tokens,
        }),
    }
}

fn chat_messages(system: &str, user: &str) -> Value {
    json!([
        { "role": "system", "content": system },
        { "role": "user", "content": user },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(kind: BackendKind) -> ResolvedBackend {
        ResolvedBackend {
            kind,
            model: "m".into(),
            ..ResolvedBackend::default()
        }
    }

    #[test]
    fn openai_chat_shape() {
        let body = build_request("sys", "usr", &backend(BackendKind::Vllm), false, 256);
        assert_eq!(
            body,
            json!({
                "model": "m",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "usr" },
                ],
                "stream": false,
                "max_tokens": 256,
            })
        );
    }

    #[test]
    fn sglang_concatenates_prompts() {
        let body = build_request("sys", "usr", &backend(BackendKind::Sglang), true, 64);
        assert_eq!(body["prompt"], "sys\n\nusr");
        assert_eq!(body["max_new_tokens"], 64);
        assert_eq!(body["stream"], true);
        assert!(body.get("messages").is_none());
    }

    #[test]
    fn ollama_uses_num_predict() {
        let body = build_request("sys", "usr", &backend(BackendKind::Ollama), false, 1024);
        assert_eq!(body["options"]["num_predict"], 1024);
        assert_eq!(body["messages"][1]["content"], "usr");
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn unknown_kind_falls_back_to_openai_shape() {
        let body = build_request("s", "u", &backend(BackendKind::parse("tgi")), false, 8);
        assert_eq!(body["max_tokens"], 8);
        assert_eq!(body["messages"][0]["role"], "system");
    }
}
