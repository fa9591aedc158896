use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    routing::get,
};

use super::filters;
use super::public::home_page;
use super::render::{Flash, PageResult, form_body, render, render_with_status};
use crate::forms::{FormFields, ShowForm};
use crate::services::view_models::ShowListing;
use crate::services::{ServiceContext, schedule};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/shows.html")]
struct ShowsTemplate {
    flash: Option<Flash>,
    shows: Vec<ShowListing>,
}

#[derive(Template)]
#[template(path = "forms/show.html")]
struct ShowFormTemplate {
    flash: Option<Flash>,
    form: ShowForm,
    errors: Vec<String>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
}

async fn list_shows(State(state): State<Arc<AppState>>) -> PageResult {
    let shows = ServiceContext::from_state(&state).show().list().await?;
    render(&ShowsTemplate { flash: None, shows })
}

async fn create_show_form() -> PageResult {
    render(&ShowFormTemplate {
        flash: None,
        form: ShowForm::starting_at(schedule::now()),
        errors: Vec::new(),
    })
}

async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> PageResult {
    let form = ShowForm::from_fields(&FormFields::from(form_body(form)?));
    let new_show = match form.parse() {
        Ok(new_show) => new_show,
        Err(errors) => {
            return render_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                &ShowFormTemplate {
                    flash: None,
                    form,
                    errors,
                },
            );
        }
    };

    let flash = match ServiceContext::from_state(&state).show().create(new_show).await {
        Ok(_) => Flash::success("Show was successfully listed!"),
        Err(_) => Flash::error("An error occurred. Show could not be listed."),
    };
    home_page(&state, Some(flash)).await
}
