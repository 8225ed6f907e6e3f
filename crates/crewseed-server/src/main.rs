use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crewseed_generate::{GenerateOptions, GenerationEngine};
use crewseed_server::{AppState, router};
use crewseed_store::{RecordStore, SUPERIORS_PARTITION, TECHNICS_PARTITION};

/// Seeds an embedded store with synthetic crew records and serves them
/// read-only over HTTP.
#[derive(Debug, Parser)]
#[command(name = "crewseed")]
struct Args {
    /// Number of superiors to generate.
    #[arg(long, default_value_t = 15)]
    superiors: u32,
    /// Number of technicians to generate.
    #[arg(long, default_value_t = 100)]
    technicians: u32,
    /// Path of the embedded database file.
    #[arg(long, default_value = "crewseed.redb")]
    db: PathBuf,
    /// Listen address for the read API.
    #[arg(long, default_value = "0.0.0.0:9090")]
    bind: SocketAddr,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Deadline in seconds for one store read.
    #[arg(long, default_value_t = 5)]
    read_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(RecordStore::open(&args.db)?);

    // Generation and persistence failures here are fatal: the store must
    // be fully seeded before the first request is served.
    let engine = GenerationEngine::new(GenerateOptions {
        superiors: args.superiors,
        technicians: args.technicians,
        seed: args.seed,
        ..GenerateOptions::default()
    });
    let result = engine.run()?;
    store.save_all(&result.superiors, SUPERIORS_PARTITION)?;
    store.save_all(&result.technicians, TECHNICS_PARTITION)?;
    info!(
        superiors = result.superiors.len(),
        technicians = result.technicians.len(),
        db = %args.db.display(),
        "records persisted"
    );

    let state = AppState {
        store,
        read_timeout: Duration::from_secs(args.read_timeout_secs),
    };
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(addr = %args.bind, "read api listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shut down; store handle released");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
