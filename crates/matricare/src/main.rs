// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matricare service binary: config, tracing, adapter construction, index
//! build-or-load, and the gateway serve loop.
//!
//! All collaborators are constructed once here and shared read-only with
//! the router; nothing global is initialized at module load time.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use matricare_config::{MatricareConfig, render_errors};
use matricare_core::MatricareError;
use matricare_core::traits::{EmbeddingAdapter, TextGenerator};
use matricare_factcheck::FactCheckClient;
use matricare_gateway::{GatewayState, ServerConfig, start_server};
use matricare_gemini::GeminiProvider;
use matricare_index::{ChunkStore, MiniLmEmbedder, ModelManager, RagEngine, ensure_index};
use matricare_router::{GeneralAnswerer, IntentClassifier, QueryRouter};
use matricare_schemes::{FirecrawlClient, SchemeFormatter};
use matricare_sms::TwilioClient;

/// Pregnancy-assistant query router service.
#[derive(Debug, Parser)]
#[command(name = "matricare", version, about)]
struct Cli {
    /// Path to a specific config file (bypasses the XDG hierarchy).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the gateway port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(rendered) => {
            eprintln!("configuration errors:\n{rendered}");
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "matricare failed to start");
        std::process::exit(1);
    }
}

/// Load and validate configuration from the CLI-selected source.
fn load_config(cli: &Cli) -> Result<MatricareConfig, String> {
    let result = match &cli.config {
        Some(path) => matricare_config::load_config_from_path(path)
            .map_err(|e| vec![matricare_config::ConfigError::Parse(Box::new(e))])
            .and_then(|config| {
                matricare_config::validate_config(&config)?;
                Ok(config)
            }),
        None => matricare_config::load_and_validate(),
    };
    result.map_err(|errors| render_errors(&errors))
}

/// Initialize the tracing subscriber from config (RUST_LOG overrides).
fn init_tracing(config: &MatricareConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.agent.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Construct all adapters, ensure the index, and serve.
async fn run(config: MatricareConfig) -> Result<(), MatricareError> {
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiProvider::new(&config)?);

    let factcheck_key = config
        .factcheck
        .api_key
        .clone()
        .ok_or_else(|| MatricareError::Config("factcheck.api_key must be set".into()))?;
    let fact_check = Arc::new(FactCheckClient::new(factcheck_key)?);

    let firecrawl_key = config
        .firecrawl
        .api_key
        .clone()
        .ok_or_else(|| MatricareError::Config("firecrawl.api_key must be set".into()))?;
    let scheme_search = Arc::new(FirecrawlClient::new(firecrawl_key)?);

    let alerts = Arc::new(TwilioClient::new(&config.twilio)?);

    // Embedding model: download on first run, then load from disk.
    let data_dir = PathBuf::from(&config.index.data_dir);
    let model_manager = ModelManager::new(data_dir.clone());
    let model_path = model_manager.ensure_model().await?;
    let embedder: Arc<dyn EmbeddingAdapter> = Arc::new(MiniLmEmbedder::from_files(
        &model_path,
        &model_manager.tokenizer_path(),
    )?);

    // Chunk store: load if populated, otherwise ingest the docs folder.
    tokio::fs::create_dir_all(&data_dir)
        .await
        .map_err(|e| MatricareError::Internal(format!("failed to create data dir: {e}")))?;
    let store = Arc::new(ChunkStore::open(&data_dir.join("index.db")).await?);
    let stats = ensure_index(
        store.as_ref(),
        embedder.as_ref(),
        PathBuf::from(&config.index.docs_dir).as_path(),
        config.index.chunk_size,
        config.index.chunk_overlap,
    )
    .await?;
    info!(
        chunks = stats.chunks,
        loaded_existing = stats.loaded_existing,
        "document index ready"
    );

    let retriever = Arc::new(RagEngine::new(
        store,
        embedder,
        generator.clone(),
        config.index.top_k,
    ));

    let router = QueryRouter::new(
        IntentClassifier::new(generator.clone()),
        GeneralAnswerer::new(generator.clone()),
        fact_check,
        scheme_search,
        SchemeFormatter::new(generator),
        alerts,
        retriever,
        config.firecrawl.search_limit,
    );

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };
    let state = GatewayState {
        router: Arc::new(router),
    };

    info!(name = config.agent.name, "starting pregnancy assistant API");
    start_server(&server_config, state).await
}
