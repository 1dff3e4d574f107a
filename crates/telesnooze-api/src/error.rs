//! Request-path error taxonomy.
//!
//! Only malformed payloads change the HTTP status. Every domain outcome is a
//! 200 with a plain-text body, which is what existing clients parse.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use telesnooze_types::api::ErrorBody;
use telesnooze_types::validation::ValidationError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not valid JSON for the expected shape
    #[error("Invalid request payload")]
    Decode(String),

    /// A field rule rejected the payload
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No account matches the supplied username and password
    #[error("Problem: Username or password is incorrect")]
    Auth,

    /// Storage or hashing failure; the cause is logged, never returned
    #[error("Something went wrong in DB process")]
    Persistence(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) | ApiError::Auth | ApiError::Persistence(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Decode(detail) => {
                warn!("Rejected request payload: {}", detail);
                return (
                    status,
                    Json(ErrorBody {
                        error: self.to_string(),
                    }),
                )
                    .into_response();
            }
            ApiError::Persistence(e) => error!("Persistence failure: {:#}", e),
            ApiError::Validation(v) => warn!("Validation failed: {}", v),
            ApiError::Auth => {}
        }
        (status, self.to_string()).into_response()
    }
}
