// Tudo Num - demo portal with AI auto-navigation
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use tudonum::catalog::RouteCatalog;
use tudonum::classifier::OpenAiClassifier;
use tudonum::config::load_config;
use tudonum::router::IntentRouter;
use tudonum::server::{PortalServer, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "tudonum")]
#[command(about = "Tudo Num demo portal with AI auto-navigation", version)]
struct Args {
    /// Bind address (overrides config file)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first, so OPENAI_API_KEY from a local .env is visible to the loader
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    let config = load_config()?;
    let bind_address = args.bind.unwrap_or_else(|| config.bind_address.clone());

    let catalog = Arc::new(RouteCatalog::builtin());
    let classifier = OpenAiClassifier::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
        Arc::clone(&catalog),
    )?;
    let intents = IntentRouter::new(Arc::clone(&catalog), Arc::new(classifier));

    let server = PortalServer::new(catalog, intents, ServerConfig { bind_address });
    server.serve().await
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
