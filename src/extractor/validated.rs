use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use validator::Validate;

use crate::error::{ApiError, ErrorVerbosityProvider, ValidationError};

use super::Extractor;

/// An extractor that validates the data extracted by another extractor consuming the request.
///
/// Handlers never run with a value that failed [`Validate::validate`].
pub struct Validated<X>(pub X);

/// Same as [`Validated`], for extractors that only need the request parts.
pub struct ValidatedParts<X>(pub X);

fn validate<X, S>(inner: &X, state: &S) -> Result<(), ApiError>
where
    X: Extractor,
    X::Extracted: Validate,
    S: ErrorVerbosityProvider,
{
    match inner.extracted().validate() {
        Ok(_) => {
            tracing::trace!("Validated");

            Ok(())
        }
        Err(errors) => {
            tracing::warn!(?errors, "Validation errors");

            let verbosity = state.error_verbosity();

            Err(ValidationError::from_validation_errors(verbosity, &errors).into())
        }
    }
}

#[async_trait]
impl<X, S> FromRequestParts<S> for ValidatedParts<X>
where
    X: FromRequestParts<S, Rejection = ApiError> + Extractor + Send,
    X::Extracted: Validate,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "validated_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let inner = X::from_request_parts(parts, state).await?;

        validate(&inner, state)?;

        Ok(ValidatedParts(inner))
    }
}

#[async_trait]
impl<X, S> FromRequest<S> for Validated<X>
where
    X: FromRequest<S, Rejection = ApiError> + Extractor + Send,
    X::Extracted: Validate,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "validated_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let inner = X::from_request(req, state).await?;

        validate(&inner, state)?;

        Ok(Validated(inner))
    }
}
