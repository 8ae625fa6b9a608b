use axum::{
    async_trait,
    extract::{
        path::ErrorKind,
        rejection::PathRejection,
        FromRequestParts, Path as AxumPath,
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::{
    error::{ApiError, ErrorVerbosityProvider, PathError},
    violation::{Violation, ViolationKind},
};

use super::Extractor;

/// A Wrapper around [`axum::extract::Path`] that rejects with an [`ApiError`].
///
/// Extracts path parameters from the request.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Debug + Send,
    S: Send + Sync + ErrorVerbosityProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "path_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = AxumPath::<T>::from_request_parts(parts, state).await;

        match path {
            Ok(path) => {
                tracing::trace!(path=?path.0, "Extracted");

                Ok(ApiPath(path.0))
            }
            Err(path_rejection) => {
                tracing::warn!(rejection=?path_rejection, "Rejection");

                let verbosity = state.error_verbosity();

                let violation = violation_from_rejection(&path_rejection);
                let path_error_reason = path_rejection.body_text();

                Err(PathError::new(verbosity, path_error_reason, violation).into())
            }
        }
    }
}

/// Maps axum's structured path error to a [`Violation`].
///
/// Rejections that are not about the parameters themselves, like a route without parameters, yield [`None`].
fn violation_from_rejection(rejection: &PathRejection) -> Option<Violation> {
    let PathRejection::FailedToDeserializePathParams(rejection) = rejection else {
        return None;
    };

    let violation = match rejection.kind() {
        ErrorKind::ParseErrorAtKey {
            key,
            value,
            expected_type,
        } => Violation {
            field: Some(key.clone()),
            kind: ViolationKind::TypeMismatch,
            message: format!("Cannot parse `{value}` as `{expected_type}`"),
        },
        ErrorKind::InvalidUtf8InPathParam { key } => Violation {
            field: Some(key.clone()),
            kind: ViolationKind::TypeMismatch,
            message: "Invalid UTF-8".to_string(),
        },
        kind => Violation {
            field: None,
            kind: ViolationKind::TypeMismatch,
            message: kind.to_string(),
        },
    };

    Some(violation)
}

impl<T> Extractor for ApiPath<T> {
    type Extracted = T;

    fn extracted(&self) -> &Self::Extracted {
        &self.0
    }
}
