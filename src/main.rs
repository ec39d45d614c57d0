use dotenvy::dotenv;
use profrate::logging::init_tracing;
use profrate::router::init_router;
use profrate::state::AppState;
use profrate_config::{DatabaseConfig, ServerConfig};
use profrate_db::{init_db_pool, run_migrations};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let db = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&db).await?;

    let state = AppState::from_env(db);
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let listener = TcpListener::bind(server.bind_address()).await?;

    info!(address = %server.bind_address(), "Server running");
    info!("Scalar UI available at http://localhost:{}/scalar", server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
