//! Cursus Web Server
//!
//! Run with: cargo run -p cursus-web

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Cursus Web Server...");

    let config = cursus_config::Config::load()?;

    // Create app state
    let state = cursus_web::state::AppState::new(&config)?;

    // Build router
    let app = cursus_web::router::build_router(state);

    // Bind to the configured address
    let addr = config.bind_addr();
    info!("🚀 Server listening on http://{}", addr);
    info!("📚 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
