//! To-Do List Backend
//!
//! Serves per-user to-do lists behind a password login. All state lives in a
//! single JSON document on local disk.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod search;
mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting To-Do List Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize the document
    if store::init_document(&config.data_path).await? {
        tracing::info!("Created empty document at {:?}", config.data_path);
    }
    let store = Arc::new(Store::new(config.data_path.clone()));
    tracing::info!("Data path: {:?}", store.data_path());

    // Fail early on an unreadable document
    let document = store.snapshot().await?;
    tracing::info!("Loaded document with {} users", document.users.len());

    // Create application state
    let state = AppState { store };

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

    let page_routes = Router::new()
        // Login and registration
        .route("/", get(api::login_form))
        .route("/register", get(api::register_form))
        .route("/register", post(api::register))
        .route("/login", post(api::login))
        // To-do lists
        .route("/todolist", get(api::todo_list))
        .route("/addtodo", post(api::add_todo))
        .route("/togglestatus", post(api::toggle_status))
        // Search
        .route("/searchtodos", get(api::search_todos));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
