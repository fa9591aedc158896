use std::path::{Path, PathBuf};
use std::sync::Arc;

use askama::Template;
use axum::{Router, extract::State, routing::get};

use super::render::{Flash, PageResult, render};
use crate::db::entities::{artist, venue};
use crate::services::ServiceContext;
use crate::state::AppState;

const RECENT_LIMIT: u64 = 10;

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    flash: Option<Flash>,
    recent_venues: Vec<venue::Model>,
    recent_artists: Vec<artist::Model>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

pub(crate) fn resolve_public_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

async fn index(State(state): State<Arc<AppState>>) -> PageResult {
    home_page(&state, None).await
}

/// The landing page; write handlers land here with their flash message.
/// The recent listings are decoration, so a failed lookup leaves them empty.
pub(crate) async fn home_page(state: &AppState, flash: Option<Flash>) -> PageResult {
    let services = ServiceContext::from_state(state);
    let recent_venues = services
        .venue()
        .recent(RECENT_LIMIT)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "recent venues unavailable");
            Vec::new()
        });
    let recent_artists = services
        .artist()
        .recent(RECENT_LIMIT)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "recent artists unavailable");
            Vec::new()
        });

    render(&HomeTemplate {
        flash,
        recent_venues,
        recent_artists,
    })
}
