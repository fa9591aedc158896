use axum::{Router, middleware};
use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    routes::{catch_panic_layer, error_page_middleware, router},
    state::AppState,
};

/// The full page router with production middleware over `db`, usually a
/// `MockDatabase` connection.
pub fn test_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(AppConfig::default(), db);
    router(state)
        .layer(middleware::from_fn(error_page_middleware))
        .layer(catch_panic_layer())
}
