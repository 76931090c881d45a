pub mod request {
    use crate::{modules::auth::middleware::ChefAuth, utils::validation};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, code = "INVALID_BUSINESS_NAME", message = "Business name cannot be empty"))]
        pub business_name: Option<String>,
        pub bio: Option<String>,
        #[validate(length(min = 1, code = "INVALID_LOCATION", message = "Location cannot be empty"))]
        pub location: Option<String>,
        #[validate(custom(
            code = "INVALID_PHONE_NUMBER",
            function = "validation::validate_phone_number"
        ))]
        pub phone: Option<String>,
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
        ChefUpdated(Chef),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefUpdated(chef) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Kitchen profile updated", "data": chef })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        ChefNotOnboarded,
        FailedToUpdateChef,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToUpdateChef => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update kitchen profile" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
