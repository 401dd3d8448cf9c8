//! HTTP server initialization and runtime setup.
//!
//! Builds the Supabase clients, wires the router and runs Axum until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::{IdentityProvider, RecordStore};
use crate::infrastructure::supabase::SupabaseClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - One shared HTTP client for the Supabase REST and Auth APIs
/// - Application state and router
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// Supabase is not contacted at startup; an unreachable project shows up
/// in `GET /health` and in request failures.
///
/// # Errors
///
/// Returns an error if:
/// - The Supabase client cannot be built
/// - `LISTEN` is not a socket address or the bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let supabase = SupabaseClient::new(&config.supabase())?;
    let identity: Arc<dyn IdentityProvider> = Arc::new(supabase.auth());
    let store: Arc<dyn RecordStore> = Arc::new(supabase.rest());
    tracing::info!("Supabase clients ready");

    let state = AppState::new(identity, store);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
