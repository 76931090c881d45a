pub mod request {
    use crate::modules::{auth::middleware::ChefAuth, meal::repository::AddOn};
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, code = "INVALID_NAME", message = "Meal name is required"))]
        pub name: String,
        pub price: BigDecimal,
        pub description: Option<String>,
        pub category: Option<String>,
        #[serde(default)]
        pub add_ons: Vec<AddOn>,
    }

    pub struct Payload {
        pub auth: ChefAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::meal::repository::Meal, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        MealCreated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealCreated(meal) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Meal created!", "data": meal })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidPrice,
        ChefNotOnboarded,
        FailedToCreateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::InvalidPrice => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Prices cannot be negative" })),
                )
                    .into_response(),
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToCreateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
