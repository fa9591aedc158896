use askama::Template;
use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

pub type PageResult = Result<Response, AppError>;

/// One-shot status message shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: &'static str,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "danger",
            message: message.into(),
        }
    }
}

pub fn render<T: Template>(template: &T) -> PageResult {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: Template>(status: StatusCode, template: &T) -> PageResult {
    let html = template
        .render()
        .map_err(|err| AppError::internal_with_source("Failed to render page", err))?;
    Ok((status, Html(html)).into_response())
}

/// Ids that are not integers name no record.
pub fn entity_id<T>(path: Result<axum::extract::Path<T>, PathRejection>) -> Result<T, AppError> {
    path.map(|axum::extract::Path(id)| id)
        .map_err(|_| AppError::not_found("Page not found"))
}

pub fn form_body<T>(form: Result<axum::Form<T>, FormRejection>) -> Result<T, AppError> {
    form.map(|axum::Form(body)| body)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}
