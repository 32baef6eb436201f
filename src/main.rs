//! Workforce Roster Backend
//!
//! A production-grade REST backend with SQLite persistence and optional
//! cloud synchronization of per-sector snapshots.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod sync;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::LocalStore;
use sync::{HttpRemoteStore, RemoteStore, SyncStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SyncStore,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Workforce Roster Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (QUADRO_API_PSK). Authentication is disabled!");
    }

    // Initialize local persistence
    let pool = db::init_database(&config.db_path).await?;
    let local = LocalStore::new(pool);

    // Remote document store, when configured
    let remote: Option<Arc<dyn RemoteStore>> = match config.remote_url.as_deref() {
        Some(url) => {
            tracing::info!("Remote store: {}", url);
            Some(Arc::new(HttpRemoteStore::new(url)))
        }
        None => {
            tracing::info!("No remote store configured (QUADRO_REMOTE_URL); running local-only");
            None
        }
    };

    let store = SyncStore::open(local, remote, config.push_quiet_period).await?;

    // Cloud mode enabled in a previous session triggers one initial pull
    let global = store.global().await;
    if global.cloud_mode && global.cloud_sync_id.is_some() {
        tracing::info!("Cloud mode is on, reconciling with remote...");
        if let Err(err) = store.pull().await {
            tracing::warn!(%err, "Initial sync failed; continuing with local data");
        }
    }

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    // API routes
    let api_routes = Router::new()
        // Login
        .route("/auth/login", post(api::login))
        // Active sector snapshot
        .route("/snapshot", get(api::get_snapshot))
        // Employees
        .route("/employees", get(api::list_employees))
        .route("/employees", post(api::create_employee))
        .route("/employees/import", post(api::import_employees))
        .route("/employees/{id}", put(api::update_employee))
        .route("/employees/{id}", delete(api::delete_employee))
        // Events
        .route("/events", get(api::list_events))
        .route("/events", post(api::create_event))
        // Users
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{id}", put(api::update_user))
        .route("/users/{id}", delete(api::delete_user))
        // Audit log and devices
        .route("/audit", get(api::list_audit))
        .route("/devices", get(api::list_devices))
        // Global settings and sectors
        .route("/config", get(api::get_config))
        .route("/config", put(api::update_config))
        .route("/sectors", get(api::list_sectors))
        .route("/sectors/{id}/activate", post(api::activate_sector))
        // Synchronization
        .route("/sync/status", get(api::sync_status))
        .route("/sync/pull", post(api::sync_pull))
        .route("/sync/push", post(api::sync_push))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
