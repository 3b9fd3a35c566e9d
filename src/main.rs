//! Point d'entrée principal de l'application.
//! Charge la configuration et démarre le serveur de validation des formulaires avec Axum.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use dotenv::dotenv;
use log::info;
use shelfmark::{backend, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Charger les variables d'environnement
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Running in {} mode", config.mode);

    let app = backend::router::get_router();

    // Démarrer le serveur web
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve the application")?;

    info!("Bye");
    Ok(())
}

/// Attend Ctrl+C pour arrêter proprement le serveur
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Ctrl+C received, shutting down");
    }
}
