use std::fs::OpenOptions;

use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use server::{config::ServerConfig, redirect, routes};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log dir {}", config.log_dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_dir.join("server.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("{}=trace,tower_http=debug", env!("CARGO_CRATE_NAME")).into())
        )
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file))
        .init();

    tracing::info!("Starting server...");
    tracing::debug!(?config);

    let app = routes::app(&config.dist_dir);

    match config.tls() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key)
                .await
                .context("loading TLS certificate")?;

            let (http_addr, https_port) = (config.http_addr(), config.https_port);
            tokio::spawn(async move {
                if let Err(err) = redirect::redirect_http_to_https(http_addr, https_port).await {
                    tracing::error!("Redirect listener failed: {err:?}");
                }
            });

            tracing::info!("Listening on https://{}", config.https_addr());
            axum_server::bind_rustls(config.https_addr(), tls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(config.http_addr()).await?;
            tracing::info!("Listening on http://{}", listener.local_addr()?);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
