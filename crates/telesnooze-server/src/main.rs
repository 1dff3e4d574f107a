mod config;

use std::sync::Arc;

use tracing::{info, warn};

use telesnooze_api::auth::{AppState, AppStateInner};
use telesnooze_api::routes;
use telesnooze_crypto::PasswordScheme;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "telesnooze=debug,telesnooze_api=debug,telesnooze_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    if config.password_scheme == PasswordScheme::Sha256 {
        warn!("New passwords are stored as unsalted SHA-256; set TELESNOOZE_PASSWORD_SCHEME=argon2 to harden");
    }

    // Init database
    let db = telesnooze_db::Database::open(&config.db_path)?;

    let state: AppState = Arc::new(AppStateInner {
        db,
        password_scheme: config.password_scheme,
    });

    let app = routes::router(state);

    let addr = config.addr()?;
    info!("Telesnooze server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
