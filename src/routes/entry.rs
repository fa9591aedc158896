use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

use super::views;

/// Page routes, with the static asset directory served for any other path.
pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = views::public::resolve_public_dir(state.config.general.public_dir.as_deref());
    views::router(state).fallback_service(ServeDir::new(public_dir))
}
