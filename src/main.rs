//! Service entrypoint.
//!
//! Startup order: environment → logging → config → Mongo client → HTTP
//! listener → connector probe (background, with backoff) → serve.
//! The connector runs outside the request path; a request arriving before
//! the first successful probe simply fails its write with a 500.

use std::process;
use std::sync::Arc;

use mongodb::Client;
use tokio::net::TcpListener;

use contact_api::config::load_config;
use contact_api::http::HttpServer;
use contact_api::lifecycle::{signals, Shutdown};
use contact_api::observability::logging;
use contact_api::persistence::{ConnectOutcome, Connector, MongoStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init();

    tracing::info!("contact-api v0.1.0 starting");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        database = %config.database,
        max_retries = config.max_retries,
        "Configuration loaded"
    );

    // Parses and validates the URI; actual connectivity is the connector's
    // job.
    let client = match Client::with_uri_str(&config.mongo_uri).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Invalid MongoDB connection string");
            process::exit(1);
        }
    };

    let listener = match TcpListener::bind(config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %config.bind_address(), error = %e, "Failed to bind listener");
            process::exit(1);
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let mut connector_shutdown = shutdown.subscribe();

    // SIGINT / SIGTERM / SIGHUP all fan into the shutdown channel.
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        tracing::info!("Shutting down gracefully");
        shutdown.trigger();
    });

    // Startup connection probe with bounded exponential backoff. Exhaustion
    // is fatal; shutdown cancels a pending retry.
    let mut connector = Connector::new(config.max_retries);
    let connector_client = client.clone();
    tokio::spawn(async move {
        match connector.run(&connector_client, &mut connector_shutdown).await {
            ConnectOutcome::Connected | ConnectOutcome::Cancelled => {}
            ConnectOutcome::Exhausted => process::exit(1),
        }
    });

    let store = Arc::new(MongoStore::new(&client, &config.database));
    let server = HttpServer::new(&config, store);
    server.run(listener, server_shutdown).await?;

    client.shutdown().await;
    tracing::info!("Shutdown complete");
    Ok(())
}
