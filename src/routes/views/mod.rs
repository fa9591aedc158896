use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod artists;
pub mod error_pages;
mod filters;
pub mod public;
mod render;
pub mod shows;
pub mod venues;

pub use error_pages::error_page;
pub use render::{Flash, PageResult};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(venues::router())
        .merge(artists::router())
        .merge(shows::router())
        .with_state(state)
}
