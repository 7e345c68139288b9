//! API routes module
//!
//! This module wires the items domain and the readiness probe to HTTP routes.

pub mod health;

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

/// Create all API routes
///
/// Items live at `/items`; `axum_helpers::create_router` merges these at the root.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(handlers::ITEMS_PATH, items_router(state))
        .merge(health::router(state.clone()))
}

fn items_router(state: &AppState) -> Router {
    let repository =
        MongoItemRepository::with_collection(&state.db, state.config.mongodb.collection());
    handlers::router(ItemService::new(repository))
}
