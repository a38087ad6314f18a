use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::web::build_router;
use activities::Config;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        error!("server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // 2. Config + in-memory directory
    let config = Config::from_env()?;
    let store = config.build_store()?;
    info!(
        activities = store.len().await,
        seed = ?config.seed_path,
        version = env!("CARGO_PKG_VERSION"),
        "activity directory seeded"
    );

    // 3. Router
    let app = build_router(store, &config.static_dir);

    // 4. Bind (one fallback port)
    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Mergington activities API listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
