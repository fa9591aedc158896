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
use serde::Deserialize;

use super::filters;
use super::public::home_page;
use super::render::{Flash, PageResult, entity_id, form_body, render, render_with_status};
use crate::forms::{FormFields, VenueForm};
use crate::services::ServiceContext;
use crate::services::view_models::{CityArea, SearchResults, VenueDetail};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
struct VenuesTemplate {
    flash: Option<Flash>,
    areas: Vec<CityArea>,
}

#[derive(Template)]
#[template(path = "pages/search_venues.html")]
struct SearchVenuesTemplate {
    flash: Option<Flash>,
    search_term: String,
    results: SearchResults,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
struct VenueDetailTemplate {
    flash: Option<Flash>,
    venue: VenueDetail,
}

#[derive(Template)]
#[template(path = "forms/venue.html")]
struct VenueFormTemplate {
    flash: Option<Flash>,
    heading: String,
    action: String,
    form: VenueForm,
    errors: Vec<String>,
}

impl VenueFormTemplate {
    fn create(form: VenueForm, errors: Vec<String>) -> Self {
        Self {
            flash: None,
            heading: "List a new venue".to_string(),
            action: "/venues/create".to_string(),
            form,
            errors,
        }
    }

    fn edit(id: i32, form: VenueForm, errors: Vec<String>) -> Self {
        Self {
            flash: None,
            heading: format!("Edit venue {}", form.name),
            action: format!("/venues/{id}/edit"),
            form,
            errors,
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/{venue_id}", get(show_venue).delete(delete_venue))
        .route("/venues/{venue_id}/delete", post(delete_venue))
        .route(
            "/venues/{venue_id}/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
}

async fn list_venues(State(state): State<Arc<AppState>>) -> PageResult {
    let areas = ServiceContext::from_state(&state).venue().list_areas().await?;
    render(&VenuesTemplate { flash: None, areas })
}

async fn search_venues(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> PageResult {
    let SearchForm { search_term } = form_body(form)?;
    let results = ServiceContext::from_state(&state)
        .venue()
        .search(&search_term)
        .await?;
    render(&SearchVenuesTemplate {
        flash: None,
        search_term,
        results,
    })
}

async fn show_venue(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let venue_id = entity_id(path)?;
    let venue = ServiceContext::from_state(&state)
        .venue()
        .detail(venue_id)
        .await?;
    render(&VenueDetailTemplate { flash: None, venue })
}

async fn create_venue_form() -> PageResult {
    render(&VenueFormTemplate::create(VenueForm::default(), Vec::new()))
}

async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult {
    let form = VenueForm::from_fields(&FormFields::from(form_body(form)?));
    if let Err(errors) = form.check() {
        return render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            &VenueFormTemplate::create(form, errors),
        );
    }

    let name = form.name.clone();
    let flash = match ServiceContext::from_state(&state).venue().create(form).await {
        Ok(_) => Flash::success(format!("Venue {name} was successfully listed!")),
        Err(_) => Flash::error(format!(
            "An error occurred. Venue {name} could not be listed."
        )),
    };
    home_page(&state, Some(flash)).await
}

async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let venue_id = entity_id(path)?;
    let venue = ServiceContext::from_state(&state)
        .venue()
        .require(venue_id)
        .await?;
    render(&VenueFormTemplate::edit(
        venue_id,
        VenueForm::from_model(&venue),
        Vec::new(),
    ))
}

async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult {
    let venue_id = entity_id(path)?;
    let form = VenueForm::from_fields(&FormFields::from(form_body(form)?));
    if let Err(errors) = form.check() {
        return render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            &VenueFormTemplate::edit(venue_id, form, errors),
        );
    }

    let venues = ServiceContext::from_state(&state).venue();
    let flash = match venues.update(venue_id, form).await {
        Ok(_) => Flash::success(format!("Venue {venue_id} was successfully updated!")),
        Err(err) if err.is_not_found() => return Err(err),
        Err(_) => Flash::error(format!(
            "An error occurred. Venue {venue_id} could not be updated."
        )),
    };
    // The detail page needs the store too; without it the flash lands on the home page.
    match venues.detail(venue_id).await {
        Ok(venue) => render(&VenueDetailTemplate {
            flash: Some(flash),
            venue,
        }),
        Err(err) => {
            tracing::warn!(error = %err, venue_id, "venue detail unavailable after edit");
            home_page(&state, Some(flash)).await
        }
    }
}

async fn delete_venue(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> PageResult {
    let venue_id = entity_id(path)?;
    let flash = match ServiceContext::from_state(&state)
        .venue()
        .remove(venue_id)
        .await
    {
        Ok(()) => Flash::success(format!("Venue {venue_id} was successfully deleted.")),
        Err(err) if err.is_not_found() => return Err(err),
        Err(_) => Flash::error(format!(
            "An error occurred. Venue {venue_id} could not be deleted."
        )),
    };
    home_page(&state, Some(flash)).await
}
