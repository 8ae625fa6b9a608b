use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::extractor::{path::ApiPath, validated::ValidatedParts};

use super::PersonIdPath;

/// Serialized as `{"<person_id>": "It exists!"}`.
#[derive(Debug)]
pub struct PersonExistsResponse {
    pub person_id: i64,
}

impl Serialize for PersonExistsResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.person_id.to_string(), "It exists!")?;
        map.end()
    }
}

impl IntoResponse for PersonExistsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    tag = "Persons",
    params(PersonIdPath),
    responses(
        (status = 200, description = "Acknowledgement keyed by the person id", body = std::collections::HashMap<String, String>),
        (status = 422, description = "The person id is not a positive integer", body = crate::error::ApiError)
    )
)]
pub async fn show_person_by_id(
    ValidatedParts(ApiPath(path)): ValidatedParts<ApiPath<PersonIdPath>>,
) -> PersonExistsResponse {
    PersonExistsResponse {
        person_id: path.person_id,
    }
}
