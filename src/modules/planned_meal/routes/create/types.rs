pub mod request {
    use crate::modules::auth::middleware::FoodieAuth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub meal_id: String,
    }

    pub struct Payload {
        pub auth: FoodieAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::planned_meal::repository::PlannedMeal;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MealPlanned(PlannedMeal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealPlanned(planned_meal) => (
                    StatusCode::CREATED,
                    Json(json!({ "message": "Meal added to your plan", "data": planned_meal })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MealNotFound,
        FailedToPlanMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meal not found" })),
                )
                    .into_response(),
                Self::FailedToPlanMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add meal to your plan" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
