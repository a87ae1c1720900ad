//! Handler for the `serve` command.

use miette::IntoDiagnostic;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use super::command::ServeArgs;
use super::config::load_config;
use crate::adapter::inbound::http::router::create_router;
use crate::infrastructure::bootstrap::build_app_state;

/// Load configuration, wire the service, and serve until Ctrl-C.
pub async fn execute(args: &ServeArgs) -> miette::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "notez starting");

    let state = build_app_state(&config).into_diagnostic()?;
    let cors = config.server.cors_layer().into_diagnostic()?;
    let app = create_router(state, cors);

    let listener = TcpListener::bind(config.server.bind_addr())
        .await
        .into_diagnostic()?;
    info!(addr = %listener.local_addr().into_diagnostic()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    info!("notez stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
