// Library entry point for Stillpoint. Exposes the module tree and the router
// constructor so integration tests can build the app without binding a
// socket; main.rs stays a thin binary shell.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod breathing;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use store::EntryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/user", get(handlers::user::current_user))
        .route("/api/catalog", get(handlers::catalog::catalog))
        .route(
            "/api/coping-strategies",
            get(handlers::catalog::coping_strategies),
        )
        .route("/api/entries", get(handlers::entries::list_entries))
        .route("/api/entries", post(handlers::entries::create_entry))
        .route(
            "/api/entries/date/:date",
            get(handlers::entries::entries_by_date),
        )
        .route(
            "/api/entries/range",
            get(handlers::entries::entries_in_range),
        )
        .route("/api/entries/:id", get(handlers::entries::get_entry))
        .route("/api/entries/:id", put(handlers::entries::update_entry))
        .route("/api/entries/:id", delete(handlers::entries::delete_entry))
        .with_state(state)
}
