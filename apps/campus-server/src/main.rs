//! Campus Events server binary.

use std::net::SocketAddr;

use campus_server::{config::Config, create_app, create_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(
        capacity_policy = %config.capacity_policy,
        simulated_latency = config.simulated_latency,
        data_dir = %config.data_dir.display(),
        "Starting Campus Events server"
    );

    // Seed the stores and restore any previous session
    let state = create_state(&config).await?;

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
