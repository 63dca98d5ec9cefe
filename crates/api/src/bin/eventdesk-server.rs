use anyhow::Context;
use eventdesk_api::{ApiConfig, AppState, build_app_router, telemetry};
use eventdesk_validator::FormCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = ApiConfig::load().context("failed to load configuration")?;
    let catalog = FormCatalog::try_builtin().context("invalid built-in form catalog")?;
    tracing::info!(
        forms = catalog.len(),
        environment = ?config.environment,
        "form catalog loaded"
    );

    let addr = config.bind_address();
    let app = build_app_router(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting server on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
