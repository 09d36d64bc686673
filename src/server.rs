//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, and Axum server lifecycle.

use crate::application::services::CustomerService;
use crate::config::Config;
use crate::domain::repositories::CustomerRepository;
use crate::infrastructure::persistence::{InMemoryCustomerRepository, PgCustomerRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Opens the PostgreSQL pool described by `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Selects the customer store: PostgreSQL when configured, otherwise in-memory.
///
/// Pending migrations are applied before the PostgreSQL store is returned.
///
/// # Errors
///
/// Returns an error if the database connection or a migration fails.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn CustomerRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured, using in-memory store");
        return Ok(Arc::new(InMemoryCustomerRepository::new()));
    };

    let pool = connect_pool(database_url, config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgCustomerRepository::new(Arc::new(pool))))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let customer_service = Arc::new(CustomerService::new(repository));
    let state = AppState::new(customer_service, config.base_url.clone());

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
///
/// A handler that fails to install never resolves, so the other signal can
/// still trigger the shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    match first_signal(ctrl_c, terminate).await {
        ShutdownSignal::Interrupt => tracing::info!("Received Ctrl-C, shutting down"),
        ShutdownSignal::Terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ShutdownSignal {
    Interrupt,
    Terminate,
}

async fn first_signal(
    interrupt: impl Future<Output = ()>,
    terminate: impl Future<Output = ()>,
) -> ShutdownSignal {
    tokio::select! {
        () = interrupt => ShutdownSignal::Interrupt,
        () = terminate => ShutdownSignal::Terminate,
    }
}
