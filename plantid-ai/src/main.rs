//! plantid-ai - Plant identification command line tool
//!
//! Reads an image, runs the multi-method identification loop against the
//! configured recognition service and prints the result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use plantid_ai::analyzers::StaticFeatureAnalyzer;
use plantid_ai::clients::{ClientSettings, PlantIdClient};
use plantid_ai::config::{resolve_api_key, IdentifyConfig};
use plantid_ai::image::load_image;
use plantid_ai::workflow::orchestrator::to_legacy_document;
use plantid_ai::IdentificationOrchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Identify a plant species from a photo
#[derive(Debug, Parser)]
#[command(name = "plantid-ai", version, about)]
struct Args {
    /// Image file to identify
    image: PathBuf,

    /// TOML config file (defaults to ~/.config/plantid/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recognition API key (overrides PLANTID_API_KEY and TOML)
    #[arg(long)]
    api_key: Option<String>,

    /// Recognition endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Print the legacy JSON document instead of the native result
    #[arg(long)]
    legacy_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut toml_config = plantid_common::config::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(endpoint) = args.endpoint {
        toml_config.endpoint = Some(endpoint);
    }

    // Initialize tracing (RUST_LOG overrides the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&toml_config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting plantid-ai {}", env!("CARGO_PKG_VERSION"));

    let api_key = resolve_api_key(args.api_key.as_deref(), &toml_config)?;
    let identify_config = IdentifyConfig::from_toml(&toml_config)?;
    let settings = ClientSettings::from_toml(&toml_config);
    info!("Endpoint: {}", settings.endpoint);

    let client = PlantIdClient::with_settings(api_key, settings)?;
    let orchestrator = IdentificationOrchestrator::new(
        Arc::new(client),
        Arc::new(StaticFeatureAnalyzer::new()),
        identify_config,
    );

    let image = load_image(&args.image)
        .await
        .with_context(|| format!("Failed to read image {}", args.image.display()))?;

    let result = orchestrator.identify(&image).await;

    let output = if args.legacy_json {
        serde_json::to_string_pretty(&to_legacy_document(&result)?)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{}", output);

    Ok(())
}
