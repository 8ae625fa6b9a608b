use utoipa::OpenApi;

use crate::{
    error::{
        ApiError, BodyError, InternalServerError, MethodNotAllowedError, NotFoundError, PathError,
        QueryError, ValidationError,
    },
    route::{
        base::home::{self, HomeResponse},
        person::{
            create_person,
            show_person::{self, ShowPersonResponse},
            show_person_by_id,
            update_person::{self, UpdatePersonBody, UpdatePersonResponse},
            HairColor, Location, Person,
        },
    },
    violation::{Violation, ViolationKind},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        create_person::create_person,
        show_person::show_person,
        show_person_by_id::show_person_by_id,
        update_person::update_person,
    ),
    components(schemas(
        HomeResponse,
        Person,
        HairColor,
        Location,
        ShowPersonResponse,
        UpdatePersonBody,
        UpdatePersonResponse,
        ApiError,
        InternalServerError,
        QueryError,
        BodyError,
        PathError,
        ValidationError,
        MethodNotAllowedError,
        NotFoundError,
        Violation,
        ViolationKind,
    )),
    tags(
        (name = "Home", description = "Greeting"),
        (name = "Persons", description = "Create, show and update persons")
    )
)]
pub struct ApiDoc;
