use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::render::Flash;
use crate::error::AppError;

#[derive(Template)]
#[template(path = "errors/404.html")]
struct NotFoundTemplate<'a> {
    flash: Option<Flash>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
struct ServerErrorTemplate<'a> {
    flash: Option<Flash>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "errors/generic.html")]
struct GenericErrorTemplate<'a> {
    flash: Option<Flash>,
    status: u16,
    reason: &'a str,
    message: &'a str,
}

/// Renders the HTML error page for `status`.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let rendered = if status == StatusCode::NOT_FOUND {
        NotFoundTemplate {
            flash: None,
            message,
        }
        .render()
    } else if status.is_server_error() {
        ServerErrorTemplate {
            flash: None,
            message,
        }
        .render()
    } else {
        GenericErrorTemplate {
            flash: None,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Request failed"),
            message,
        }
        .render()
    };

    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render error page");
            (status, Html(format!("<h1>{status}</h1>"))).into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_page(self.status(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    use crate::error::AppError;

    #[tokio::test]
    async fn not_found_renders_html_page() {
        let response = AppError::not_found("Venue not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Venue not found"));
        assert!(html.contains("<html"));
    }

    #[tokio::test]
    async fn messages_are_escaped() {
        let response = AppError::bad_request("<script>").into_response();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let html = String::from_utf8_lossy(&body);
        assert!(!html.contains("<script>"));
        assert!(html.contains("400"));
    }
}
