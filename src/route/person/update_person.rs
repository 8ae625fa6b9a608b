use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::extractor::{
    json::ApiJson,
    path::ApiPath,
    validated::{Validated, ValidatedParts},
};

use super::{Location, Person, PersonIdPath};

/// Both body parameters, each embedded under its own name.
#[derive(Debug, Deserialize, JsonSchema, ToSchema, Validate)]
pub struct UpdatePersonBody {
    #[validate(nested)]
    pub person: Person,
    #[validate(nested)]
    pub location: Location,
}

/// The fields of the person and the location in one flat object.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatePersonResponse {
    #[serde(flatten)]
    pub person: Person,
    #[serde(flatten)]
    pub location: Location,
}

impl IntoResponse for UpdatePersonResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    put,
    path = "/person/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    request_body = UpdatePersonBody,
    responses(
        (status = 200, description = "The merged person and location", body = UpdatePersonResponse),
        (status = 400, description = "Malformed JSON", body = crate::error::ApiError),
        (status = 422, description = "The path or the body violates a constraint", body = crate::error::ApiError)
    )
)]
pub async fn update_person(
    ValidatedParts(ApiPath(path)): ValidatedParts<ApiPath<PersonIdPath>>,
    Validated(ApiJson(body)): Validated<ApiJson<UpdatePersonBody>>,
) -> UpdatePersonResponse {
    tracing::debug!(person_id = path.person_id, "Updating person");

    UpdatePersonResponse {
        person: body.person,
        location: body.location,
    }
}
