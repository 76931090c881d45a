pub mod request {
    use crate::modules::{auth::middleware::ChefAuth, chef::discovery};
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_required(value: &str) -> Result<(), ValidationError> {
        match value.trim().is_empty() {
            false => Ok(()),
            true => Err(ValidationError::new("REQUIRED")
                .with_message(Cow::from("This field is required"))),
        }
    }

    fn validate_food_types(food_types: &Vec<String>) -> Result<(), ValidationError> {
        match food_types
            .iter()
            .all(|food_type| discovery::food_type(food_type).is_some())
        {
            true => Ok(()),
            false => Err(ValidationError::new("INVALID_FOOD_TYPE").with_message(Cow::from(
                "Food types must be one of Swahili, Vegan, Keto, Grill, Pastry, Healthy",
            ))),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(code = "INVALID_BUSINESS_NAME", function = "validate_required"))]
        pub business_name: String,
        #[validate(custom(code = "INVALID_LOCATION", function = "validate_required"))]
        pub location: String,
        pub bio: Option<String>,
        #[serde(default)]
        #[validate(custom(code = "INVALID_FOOD_TYPE", function = "validate_food_types"))]
        pub food_types: Vec<String>,
    }

    pub struct Payload {
        pub auth: ChefAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::chef::repository::Chef, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ChefCreated(Chef),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefCreated(chef) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Kitchen profile submitted for approval",
                        "data": chef
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        AlreadyOnboarded,
        FailedToCreateChef,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::AlreadyOnboarded => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "You've already created a kitchen profile" })),
                )
                    .into_response(),
                Self::FailedToCreateChef => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create kitchen profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
