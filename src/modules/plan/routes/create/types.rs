pub mod request {
    use crate::modules::{auth::middleware::ChefAuth, plan::repository::PlanDuration};
    use serde::Deserialize;
    use sqlx::types::BigDecimal;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, code = "INVALID_TITLE", message = "Plan title is required"))]
        pub title: String,
        pub description: Option<String>,
        pub price: BigDecimal,
        pub duration: PlanDuration,
        #[validate(range(
            min = 1,
            max = 21,
            code = "INVALID_MEALS_PER_WEEK",
            message = "Meals per week must be between 1 and 21"
        ))]
        pub meals_per_week: i32,
    }

    pub struct Payload {
        pub auth: ChefAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::plan::repository::MenuPlan, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PlanCreated(MenuPlan),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlanCreated(plan) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Menu plan created!", "data": plan })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidPrice,
        ChefNotOnboarded,
        FailedToCreatePlan,
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
                Self::FailedToCreatePlan => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create menu plan" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
