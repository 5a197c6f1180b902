//! # chorehubd — chorehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Connect to the MQTT broker and wire the command handler, periodic
//!   refresher, and availability lifecycle
//! - Build the axum router, bind to a TCP port, and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), publishing the offline
//!   availability marker after the server loop exits
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use chorehub_adapter_http_axum::state::AppState;
use chorehub_adapter_mqtt::{
    AvailabilityLifecycle, MqttCommandHandler, MqttDiscoveryPublisher, MqttGateway,
    MqttStatePublisher, StatusRefresher, topics,
};
use chorehub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteChoreHistoryStore, SqliteChoreRepository, SqlitePool,
    SqliteUserRepository,
};
use chorehub_app::ports::BrokerGateway;
use chorehub_app::ports::sync::{NoopDiscoveryPublisher, NoopStatePublisher};
use chorehub_app::services::chore_service::ChoreService;
use chorehub_app::services::user_service::UserService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let db = StorageConfig {
        database_url: config.database.url.clone(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    if config.mqtt.enabled {
        run_with_broker(&config, pool).await
    } else {
        tracing::info!("MQTT integration disabled, serving HTTP only");
        run_without_broker(&config, pool).await
    }
}

/// Full wiring: broker gateway, command handler, refresher, lifecycle.
async fn run_with_broker(
    config: &Config,
    pool: SqlitePool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (gateway, event_loop) = MqttGateway::connect(&config.mqtt.connection);
    let state_publisher = MqttStatePublisher::new(gateway.clone());
    let discovery = MqttDiscoveryPublisher::new(gateway.clone());

    let chore_service = Arc::new(ChoreService::new(
        SqliteChoreRepository::new(pool.clone()),
        SqliteChoreHistoryStore::new(pool.clone()),
        state_publisher.clone(),
        discovery.clone(),
    ));
    let user_service = Arc::new(UserService::new(SqliteUserRepository::new(pool)));

    // Inbound mark-done commands mutate chores through the service so the
    // same completion path runs regardless of where the command came from.
    let handler = MqttCommandHandler::new(Arc::clone(&chore_service), state_publisher.clone());
    let broker_task = event_loop.spawn(handler);

    if let Err(err) = gateway.subscribe(topics::COMMAND_SUBSCRIPTION).await {
        tracing::warn!(%err, "failed to subscribe to command topic");
    }

    let lifecycle = AvailabilityLifecycle::new(gateway.clone(), discovery);
    lifecycle.announce_online().await;

    let refresher = StatusRefresher::new(
        Arc::clone(&chore_service),
        state_publisher,
        Duration::from_secs(config.mqtt.connection.refresh_interval_secs),
    );
    let refresh_task = tokio::spawn(refresher.run());

    let app = chorehub_adapter_http_axum::router::build(AppState::from_arcs(
        chore_service,
        user_service,
    ));
    serve(app, &config.bind_addr()).await?;

    // The server loop exited on a shutdown signal: mark the service
    // offline before the process goes away. The broker last-will only
    // covers non-graceful exits.
    lifecycle.announce_offline().await;
    refresh_task.abort();
    broker_task.abort();

    Ok(())
}

/// HTTP-only wiring with no broker side effects.
async fn run_without_broker(
    config: &Config,
    pool: SqlitePool,
) -> Result<(), Box<dyn std::error::Error>> {
    let chore_service = ChoreService::new(
        SqliteChoreRepository::new(pool.clone()),
        SqliteChoreHistoryStore::new(pool.clone()),
        NoopStatePublisher,
        NoopDiscoveryPublisher,
    );
    let user_service = UserService::new(SqliteUserRepository::new(pool));

    let app = chorehub_adapter_http_axum::router::build(AppState::new(
        chore_service,
        user_service,
    ));
    serve(app, &config.bind_addr()).await
}

async fn serve(app: axum::Router, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(%bind_addr, "chorehubd listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
