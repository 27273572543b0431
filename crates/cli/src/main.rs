//! promptmap CLI — the main entry point.
//!
//! Commands:
//! - `analyze`          — Extract parts from a prompt into JSON
//! - `analyze-semantic` — Classify a payload and draw its semantic tree
//! - `visualize`        — Draw the part flow of an analysis as Mermaid
//! - `optimize`         — Reorder parts and render Markdown
//! - `route`            — Build (and optionally send) a backend request
//! - `dry-run`          — Preview the prompts without sending anything

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "promptmap",
    about = "promptmap — analyze, visualize, optimize and route structured prompts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract parts from prompt files into JSON
    Analyze {
        /// System prompt file (Markdown)
        #[arg(long = "in", value_name = "FILE")]
        input: PathBuf,

        /// User prompt file (Markdown)
        #[arg(long)]
        user: Option<PathBuf>,

        /// Output parts JSON path
        #[arg(long, default_value = "parts.json")]
        out: PathBuf,
    },

    /// Classify an LLM payload semantically and save a Mermaid tree
    #[command(name = "analyze-semantic")]
    AnalyzeSemantic {
        /// Payload text file to analyze
        #[arg(short, long)]
        payload: PathBuf,

        /// Mermaid output path
        #[arg(short, long, default_value = "payload_diagram.mmd")]
        out: PathBuf,

        /// Read classifier records from this JSON file instead of calling the LLM
        #[arg(long)]
        records: Option<PathBuf>,
    },

    /// Visualize parts structure and ordering
    Visualize {
        /// Parts JSON from `analyze`
        #[arg(long)]
        parts: PathBuf,

        /// Visualization format (defaults to `visualize.format` in config)
        #[arg(long)]
        format: Option<String>,

        /// Output file
        #[arg(long, default_value = "prompt.mmd")]
        out: PathBuf,
    },

    /// Reorder parts by priority and render Markdown
    Optimize {
        /// Parts JSON from `analyze`
        #[arg(long)]
        parts: PathBuf,

        /// Optimized system prompt output
        #[arg(long, default_value = "system.opt.md")]
        out: PathBuf,
    },

    /// Build a request for a backend and optionally send it
    Route(commands::route::RouteArgs),

    /// Preview the pipeline without sending requests
    #[command(name = "dry-run")]
    DryRun {
        #[arg(long)]
        system: PathBuf,

        #[arg(long)]
        user: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze { input, user, out } => {
            commands::analyze::run(&input, user.as_deref(), &out).await?
        }
        Commands::AnalyzeSemantic {
            payload,
            out,
            records,
        } => commands::semantic::run(&payload, &out, records.as_deref()).await?,
        Commands::Visualize { parts, format, out } => {
            commands::visualize::run(&parts, format.as_deref(), &out).await?
        }
        Commands::Optimize { parts, out } => commands::optimize::run(&parts, &out).await?,
        Commands::Route(args) => commands::route::run(args).await?,
        Commands::DryRun { system, user } => commands::dry_run::run(&system, &user).await?,
    }

    Ok(())
}
