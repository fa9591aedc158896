use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};

use super::filters;
use super::public::home_page;
use super::render::{Flash, PageResult, entity_id, form_body, render, render_with_status};
use super::venues::SearchForm;
use crate::forms::{ArtistForm, FormFields};
use crate::services::ServiceContext;
use crate::services::view_models::{ArtistDetail, ArtistListItem, SearchResults};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/artists.html")]
struct ArtistsTemplate {
    flash: Option<Flash>,
    artists: Vec<ArtistListItem>,
}

#[derive(Template)]
#[template(path = "pages/search_artists.html")]
struct SearchArtistsTemplate {
    flash: Option<Flash>,
    search_term: String,
    results: SearchResults,
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
struct ArtistDetailTemplate {
    flash: Option<Flash>,
    artist: ArtistDetail,
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
struct ArtistFormTemplate {
    flash: Option<Flash>,
    heading: String,
    action: String,
    form: ArtistForm,
    errors: Vec<String>,
}

impl ArtistFormTemplate {
    fn create(form: ArtistForm, errors: Vec<String>) -> Self {
        Self {
            flash: None,
            heading: "List a new artist".to_string(),
            action: "/artists/create".to_string(),
            form,
            errors,
        }
    }

    fn edit(id: i32, form: ArtistForm, errors: Vec<String>) -> Self {
        Self {
            flash: None,
            heading: format!("Edit artist {}", form.name),
            action: format!("/artists/{id}/edit"),
            form,
            errors,
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/{artist_id}", get(show_artist).delete(delete_artist))
        .route("/artists/{artist_id}/delete", post(delete_artist))
        .route(
            "/artists/{artist_id}/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
}

async fn list_artists(State(state): State<Arc<AppState>>) -> PageResult {
    let artists = ServiceContext::from_state(&state).artist().list().await?;
    render(&ArtistsTemplate {
        flash: None,
        artists,
    })
}

async fn search_artists(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> PageResult {
    let SearchForm { search_term } = form_body(form)?;
    let results = ServiceContext::from_state(&state)
        .artist()
        .search(&search_term)
        .await?;
    render(&SearchArtistsTemplate {
        flash: None,
        search_term,
        results,
    })
}

async fn show_artist(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let artist_id = entity_id(path)?;
    let artist = ServiceContext::from_state(&state)
        .artist()
        .detail(artist_id)
        .await?;
    render(&ArtistDetailTemplate {
        flash: None,
        artist,
    })
}

async fn create_artist_form() -> PageResult {
    render(&ArtistFormTemplate::create(ArtistForm::default(), Vec::new()))
}

async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult {
    let form = ArtistForm::from_fields(&FormFields::from(form_body(form)?));
    if let Err(errors) = form.check() {
        return render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            &ArtistFormTemplate::create(form, errors),
        );
    }

    let name = form.name.clone();
    let flash = match ServiceContext::from_state(&state).artist().create(form).await {
        Ok(_) => Flash::success(format!("Artist {name} was successfully listed!")),
        Err(_) => Flash::error(format!(
            "An error occurred. Artist {name} could not be listed."
        )),
    };
    home_page(&state, Some(flash)).await
}

async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let artist_id = entity_id(path)?;
    let artist = ServiceContext::from_state(&state)
        .artist()
        .require(artist_id)
        .await?;
    render(&ArtistFormTemplate::edit(
        artist_id,
        ArtistForm::from_model(&artist),
        Vec::new(),
    ))
}

async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult {
    let artist_id = entity_id(path)?;
    let form = ArtistForm::from_fields(&FormFields::from(form_body(form)?));
    if let Err(errors) = form.check() {
        return render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            &ArtistFormTemplate::edit(artist_id, form, errors),
        );
    }

    let artists = ServiceContext::from_state(&state).artist();
    let flash = match artists.update(artist_id, form).await {
        Ok(_) => Flash::success(format!("Artist {artist_id} was successfully updated!")),
        Err(err) if err.is_not_found() => return Err(err),
        Err(_) => Flash::error(format!(
            "An error occurred. Artist {artist_id} could not be updated."
        )),
    };
    // The detail page needs the store too; without it the flash lands on the home page.
    match artists.detail(artist_id).await {
        Ok(artist) => render(&ArtistDetailTemplate {
            flash: Some(flash),
            artist,
        }),
        Err(err) => {
            tracing::warn!(error = %err, artist_id, "artist detail unavailable after edit");
            home_page(&state, Some(flash)).await
        }
    }
}

async fn delete_artist(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let artist_id = entity_id(path)?;
    let flash = match ServiceContext::from_state(&state)
        .artist()
        .remove(artist_id)
        .await
    {
        Ok(()) => Flash::success(format!("Artist {artist_id} was successfully deleted.")),
        Err(err) if err.is_not_found() => return Err(err),
        Err(_) => Flash::error(format!(
            "An error occurred. Artist {artist_id} could not be deleted."
        )),
    };
    home_page(&state, Some(flash)).await
}
