//! `promptmap route` — Build a backend request and optionally send it.

use std::path::PathBuf;

use clap::Args;
use promptmap_providers::{build_request, resolve_backend, send_request};

use super::{load_config, read_text};

#[derive(Args)]
pub struct RouteArgs {
    /// System prompt file (Markdown)
    #[arg(long)]
    pub system: PathBuf,

    /// User prompt file (Markdown)
    #[arg(long)]
    pub user: PathBuf,

    /// Backend id or kind
    #[arg(long, default_value = "local-vllm")]
    pub backend: String,

    /// Actually send the request (otherwise dry-run)
    #[arg(long)]
    pub send: bool,

    /// Enable streaming if supported
    #[arg(long)]
    pub stream: bool,

    /// Max tokens for generation
    #[arg(long, default_value_t = 1024)]
    pub max_tokens: u32,

    /// Override backend endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override model name
    #[arg(long)]
    pub model: Option<String>,

    /// Extra HTTP headers 'Key: Value'
    #[arg(long = "header", value_name = "HEADER")]
    pub headers: Vec<String>,
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let config = load_config()?;
    let mut backend = resolve_backend(&config, &args.backend);

    if let Some(endpoint) = args.endpoint {
        backend.url = endpoint;
    }
    if let Some(model) = args.model {
        backend.model = model;
    }
    for header in &args.headers {
        backend.add_header(header)?;
    }

    let body = build_request(
        &read_text(&args.system)?,
        &read_text(&args.user)?,
        &backend,
        args.stream,
        args.max_tokens,
    );

    if !args.send {
        println!("Dry-run request payload for {} ({}):", backend.url, backend.kind.as_str());
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let reply = send_request(&backend, &body).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
