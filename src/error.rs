use axum::http::StatusCode;

use crate::db::dao::DaoLayerError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Logs `source` and keeps only `message` for the client.
    pub fn internal_with_source(message: impl Into<String>, source: impl std::fmt::Display) -> Self {
        let message = message.into();
        tracing::error!(error = %source, "{message}");
        Self::Internal(message)
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::Db(db_err) => {
                AppError::internal_with_source("Database operation failed", db_err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sea_orm::DbErr;

    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn dao_not_found_maps_to_404() {
        let err = AppError::from(DaoLayerError::NotFound {
            entity: "venue",
            id: 7,
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "venue not found (id=7)");
    }

    #[test]
    fn dao_db_errors_hide_details_from_clients() {
        let err = AppError::from(DaoLayerError::Db(DbErr::Custom("disk full".to_string())));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Database operation failed");
    }
}
