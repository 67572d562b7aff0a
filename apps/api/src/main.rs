mod config;
mod errors;
mod routes;
mod scan;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::scan::taxonomy::KeywordTaxonomy;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cvscan_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVScan API v{}", env!("CARGO_PKG_VERSION"));

    // Load the keyword taxonomy once; it is read-only for the process lifetime.
    let taxonomy = Arc::new(KeywordTaxonomy::load(config.taxonomy_path.as_deref())?);
    info!(
        keywords = taxonomy.all_keywords().len(),
        categories = taxonomy.category_names().count(),
        "Keyword taxonomy loaded"
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        taxonomy,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
