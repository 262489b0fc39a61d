use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Error type shared by the payroll engine, the query layer and the API
/// handlers. Implements `ResponseError` so handlers can use `?` directly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("employee {employee_id} has no salary configured")]
    NoSalaryConfigured { employee_id: i64 },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("a payroll cycle is already running for employee {employee_id}")]
    ConcurrencyConflict { employee_id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to encode payment breakdown: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::NoSalaryConfigured { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Error::ConcurrencyConflict { .. } => StatusCode::CONFLICT,
            Error::Database(_) | Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Error::Database(e) => {
                tracing::error!(error = %e, "Database error");
                json!({ "error": "Internal Server Error" })
            }
            Error::Serialization(e) => {
                tracing::error!(error = %e, "Serialization error");
                json!({ "error": "Internal Server Error" })
            }
            other => json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_maps_to_404() {
        let err = Error::not_found("employee", 7);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "employee with id 7 not found");
    }

    #[test]
    fn no_salary_maps_to_422() {
        let err = Error::NoSalaryConfigured { employee_id: 3 };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_argument_maps_to_400() {
        let err = Error::invalid("date must be YYYY-MM-DD");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "date must be YYYY-MM-DD");
    }

    #[test]
    fn concurrency_conflict_maps_to_409() {
        let err = Error::ConcurrencyConflict { employee_id: 1 };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }
}
