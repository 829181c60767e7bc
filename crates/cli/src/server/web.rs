use alotame_api::{create_allowlist_routes, AppState};
use alotame_domain::config::ServerConfig;
use anyhow::{anyhow, Context};
use axum::{http::StatusCode, Router};
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn start_web_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(addr = %format!("http://{}/allowlist.txt", addr), "Starting server");

    let app = create_app(state, config.request_timeout());
    serve_until(listener, app, shutdown_signal(), config.shutdown_timeout()).await
}

fn create_app(state: AppState, request_timeout: Duration) -> Router {
    create_allowlist_routes(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serves until `shutdown` resolves, then drains in-flight requests for at
/// most `shutdown_timeout`.
async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    shutdown_timeout: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signal_tx, signal_rx) = oneshot::channel::<()>();

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown.await;
        let _ = signal_tx.send(());
    });
    let mut serve = std::pin::pin!(server.into_future());

    tokio::select! {
        result = &mut serve => {
            return result.context("server error");
        }
        _ = signal_rx => {}
    }

    info!("Shutting down server...");

    match tokio::time::timeout(shutdown_timeout, serve).await {
        Ok(result) => {
            result.context("server error")?;
            info!("Server stopped gracefully");
            Ok(())
        }
        Err(_) => Err(anyhow!("server forced to shutdown")),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
