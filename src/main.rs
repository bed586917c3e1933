mod config;
mod error;
mod routes;

use std::process::ExitCode;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "coursehub failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    if config.client.identity_url.is_empty() {
        tracing::warn!("COURSEHUB_IDENTITY_URL not set; registration and login are disabled");
    }

    let app = routes::app(&config.client)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "coursehub listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
