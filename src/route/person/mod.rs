use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub mod app;
pub mod create_person;
pub mod show_person;
pub mod show_person_by_id;
pub mod update_person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema, Validate)]
pub struct Person {
    #[validate(length(min = 1, max = 50, message = "Must be between 1 and 50 characters long"))]
    #[schema(example = "Tony", min_length = 1, max_length = 50)]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Must be between 1 and 50 characters long"))]
    #[schema(example = "Stark", min_length = 1, max_length = 50)]
    pub last_name: String,
    #[validate(range(
        exclusive_min = 0,
        max = 115,
        message = "Must be greater than 0 and at most 115"
    ))]
    #[schemars(range(min = 1, max = 115))]
    #[schema(example = 27, exclusive_minimum = 0, maximum = 115)]
    pub age: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = false)]
    pub is_married: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, ToSchema, Validate)]
pub struct Location {
    #[schema(example = "Malibu")]
    pub city: String,
    #[schema(example = "California")]
    pub state: String,
    #[schema(example = "USA")]
    pub country: String,
}

/// Path parameters of the routes addressing a single person.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Path)]
pub struct PersonIdPath {
    /// Person Id
    ///
    /// This is the person id. It's required and must be more than zero
    #[validate(range(exclusive_min = 0, message = "Must be greater than 0"))]
    #[param(example = 123, exclusive_minimum = 0)]
    pub person_id: i64,
}
