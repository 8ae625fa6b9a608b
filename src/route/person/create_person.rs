use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::extractor::{json::ApiJson, validated::Validated};

use super::Person;

impl IntoResponse for Person {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Echoes a valid person back.
#[utoipa::path(
    post,
    path = "/person/new",
    tag = "Persons",
    request_body = Person,
    responses(
        (status = 200, description = "The person as received", body = Person),
        (status = 400, description = "Malformed JSON", body = crate::error::ApiError),
        (status = 422, description = "The person violates a constraint", body = crate::error::ApiError)
    )
)]
pub async fn create_person(Validated(ApiJson(person)): Validated<ApiJson<Person>>) -> Person {
    person
}
