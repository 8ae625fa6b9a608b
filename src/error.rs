use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::violation::Violation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    #[default]
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

pub trait ErrorVerbosityProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: &'static str,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status_code = self.error.status_code();

        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => status_code.into_response(),
            ErrorVerbosity::Message => {
                (status_code, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                (status_code, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize, ToSchema)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Query error
    ///
    /// This error is returned when the query parameters could not be deserialized.
    Query(QueryError),
    /// Body error
    ///
    /// This error is returned when the body could not be deserialized.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path parameters could not be deserialized.
    Path(PathError),
    /// Validation error
    ///
    /// This error is returned when the extracted data violates a declared constraint.
    Validation(ValidationError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
}

impl ApiError {
    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Query(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Path(err) => err.verbosity,
            ApiError::Validation(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "An internal server error has occurred",
            ApiError::Query(_) => "Failed to parse query parameters",
            ApiError::Body(_) => "Failed to parse request body",
            ApiError::Path(_) => "Failed to parse path parameters",
            ApiError::Validation(_) => "Request validation failed",
            ApiError::MethodNotAllowed(_) => "Method not allowed",
            ApiError::NotFound(_) => "The requested resource was not found",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Query(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(err) => err.status_code,
            ApiError::Path(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity() {
            ErrorVerbosity::None => "",
            _ => error.message(),
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then_some(err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QueryError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    query_error_reason: Option<String>,
    query_expected_schema: Option<String>,
    violations: Option<Vec<Violation>>,
}

impl QueryError {
    pub fn new(
        verbosity: ErrorVerbosity,
        query_error_reason: String,
        query_expected_schema: String,
    ) -> Self {
        let violation = Violation::from_deserialize_reason(&query_error_reason);

        let (query_error_reason, query_expected_schema, violations) =
            match verbosity.should_generate_error_reason() {
                true => (
                    Some(query_error_reason),
                    Some(query_expected_schema),
                    Some(vec![violation]),
                ),
                false => (None, None, None),
            };

        QueryError {
            verbosity,
            query_error_reason,
            query_expected_schema,
            violations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    status_code: StatusCode,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
    violations: Option<Vec<Violation>>,
}

impl BodyError {
    /// `status_code` is the status of the underlying rejection.
    ///
    /// Only data errors ([`StatusCode::UNPROCESSABLE_ENTITY`]) carry violations,
    /// syntax and content type errors do not name a field.
    pub fn new(
        verbosity: ErrorVerbosity,
        status_code: StatusCode,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let violations = (status_code == StatusCode::UNPROCESSABLE_ENTITY)
            .then(|| vec![Violation::from_deserialize_reason(&body_error_reason)]);

        let (body_error_reason, body_expected_schema, violations) =
            match verbosity.should_generate_error_reason() {
                true => (
                    Some(body_error_reason),
                    Some(body_expected_schema),
                    violations,
                ),
                false => (None, None, None),
            };

        BodyError {
            verbosity,
            status_code,
            body_error_reason,
            body_expected_schema,
            violations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PathError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    path_error_reason: Option<String>,
    violations: Option<Vec<Violation>>,
}

impl PathError {
    pub fn new(
        verbosity: ErrorVerbosity,
        path_error_reason: String,
        violation: Option<Violation>,
    ) -> Self {
        let (path_error_reason, violations) = match verbosity.should_generate_error_reason() {
            true => (Some(path_error_reason), violation.map(|v| vec![v])),
            false => (None, None),
        };

        PathError {
            verbosity,
            path_error_reason,
            violations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    violations: Option<Vec<Violation>>,
}

impl ValidationError {
    pub fn from_validation_errors(
        verbosity: ErrorVerbosity,
        errors: &validator::ValidationErrors,
    ) -> Self {
        let violations = verbosity
            .should_generate_error_reason()
            .then(|| Violation::from_validation_errors(errors));

        ValidationError {
            verbosity,
            violations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }
}
