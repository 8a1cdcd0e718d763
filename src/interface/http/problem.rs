use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::errors::{DomainError, FieldViolation};

pub type ApiResult<T> = Result<T, ApiProblem>;

/// HTTP-facing rendering of `DomainError`. Validation and storage failures
/// become problem-details bodies; not-found is an empty 404 so callers can
/// treat absence as a plain status check.
#[derive(Debug)]
pub enum ApiProblem {
    Validation(Vec<FieldViolation>),
    NotFound,
    Internal(String),
}

impl From<DomainError> for ApiProblem {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(violations) => Self::Validation(violations),
            DomainError::NotFound => Self::NotFound,
            DomainError::Storage(detail) => Self::Internal(detail),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationProblem {
    title: &'static str,
    status: u16,
    violations: Vec<FieldViolation>,
    correlation_id: String,
}

#[derive(Debug, Serialize)]
struct InternalProblem {
    title: &'static str,
    status: u16,
    detail: String,
    correlation_id: String,
}

impl IntoResponse for ApiProblem {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(violations) => problem_response(
                StatusCode::BAD_REQUEST,
                Json(ValidationProblem {
                    title: "Validation failed",
                    status: StatusCode::BAD_REQUEST.as_u16(),
                    violations,
                    correlation_id: Uuid::new_v4().to_string(),
                }),
            ),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "request failed against the store");
                problem_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalProblem {
                        title: "Internal server error",
                        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                        detail,
                        correlation_id: Uuid::new_v4().to_string(),
                    }),
                )
            }
        }
    }
}

fn problem_response<T: Serialize>(status: StatusCode, body: Json<T>) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/problem+json"),
    );
    response
}
