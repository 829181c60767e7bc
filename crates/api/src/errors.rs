use alotame_domain::DomainError;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            DomainError::AllowlistHash(_) => "failed to get ETag of allowlist",
            DomainError::AllowlistUnavailable(_) => "failed to load allowlist",
            _ => "internal error",
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", message),
        )
            .into_response()
    }
}
