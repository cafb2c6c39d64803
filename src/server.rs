//! HTTP listener bootstrap.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::create_router;
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::lifecycle::Lifecycle;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Validate settings, bind the listener, and serve until Ctrl+C or SIGTERM.
pub async fn run(settings: &Settings) -> Result<()> {
    settings.validate().map_err(AppError::InvalidSettings)?;

    metrics::init_metrics();
    if let Some(port) = settings.metrics_port {
        metrics::install_exporter(port)?;
    }

    log_reload_mode(settings);

    let listener = TcpListener::bind(settings.bind_address()).await?;
    let lifecycle = Arc::new(Lifecycle::new());

    serve(listener, create_router(settings), lifecycle, shutdown_signal()).await
}

/// Report the reload flag. Reload is a development setting, so it only
/// warrants a warning when enabled in production.
fn log_reload_mode(settings: &Settings) {
    if !settings.api_reload {
        return;
    }
    if settings.is_production() {
        warn!("API_RELOAD is enabled in production; the binary does not reload itself");
    } else {
        info!("API_RELOAD is set: run under a file watcher to reload on change");
    }
}

/// Serve `router` on an already-bound listener.
///
/// Runs the startup hook before accepting connections and the shutdown
/// hook once `shutdown` resolves and in-flight requests have drained.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    lifecycle: Arc<Lifecycle>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;

    lifecycle.startup();
    info!("HTTP server listening on {}", addr);

    let result = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await;

    lifecycle.shutdown();
    result.map_err(AppError::Io)
}
