//! LLM Translator Web - web server startup.

use anyhow::Result;
use clap::Parser;
use llm_translator_core::ModelConfig;
use llm_translator_web::{app, resolve_static_dir, state::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "llm-translator-web")]
#[command(author, version, about = "Translation server for local LLM backends", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Provider preset (ollama, lmstudio, vllm, webui, custom)
    #[arg(long, env = "LLM_PROVIDER")]
    provider: Option<String>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Static files directory (defaults to ./static or crate's static dir)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Resolve the model configuration once; handlers only ever see this value.
    let config = ModelConfig::resolve(args.provider.as_deref());
    info!(
        "Using provider {} (model {} at {})",
        config.name, config.model, config.base_url
    );

    let state = Arc::new(AppState::new(config));
    let app = app(state, resolve_static_dir(args.static_dir.as_deref()));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
