use std::net::SocketAddr;
use std::sync::Arc;

use attendia_api::{app, state::{AppState, AuthConfig}};
use attendia_booking::{BookingService, TransferPolicy};
use attendia_store::{DbClient, PgBookingStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "attendia_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = attendia_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Attendia booking API on port {}", config.server.port);

    // Database connection + schema
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let store = Arc::new(PgBookingStore::new(db.pool.clone()));
    let booking = Arc::new(BookingService::new(
        store,
        TransferPolicy {
            enforce_ownership: config.booking.enforce_transfer_ownership,
        },
    ));

    let app_state = AppState {
        booking,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // Pool is opened on startup and drained here on the way out.
    db.close().await;
    tracing::info!("Shutdown complete");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
}
