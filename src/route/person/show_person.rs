use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::extractor::{query::ApiQuery, validated::ValidatedParts};

#[derive(Debug, Deserialize, JsonSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ShowPersonQuery {
    /// Person Name
    ///
    /// This is the person name. It's between 1 and 50 characters
    #[validate(length(min = 1, max = 50, message = "Must be between 1 and 50 characters long"))]
    #[param(example = "Rocio", min_length = 1, max_length = 50)]
    pub name: Option<String>,
    /// Person Age
    ///
    /// This is the person age. It's required
    // Free-form text, unlike `Person::age`.
    #[param(example = "25")]
    pub age: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ShowPersonResponse {
    pub name: Option<String>,
    pub age: String,
}

impl IntoResponse for ShowPersonResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/person/detail",
    tag = "Persons",
    params(ShowPersonQuery),
    responses(
        (status = 200, description = "The queried name and age", body = ShowPersonResponse),
        (status = 422, description = "Missing or invalid query parameters", body = crate::error::ApiError)
    )
)]
pub async fn show_person(
    ValidatedParts(ApiQuery(query)): ValidatedParts<ApiQuery<ShowPersonQuery>>,
) -> ShowPersonResponse {
    ShowPersonResponse {
        name: query.name,
        age: query.age,
    }
}
