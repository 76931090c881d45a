pub mod request {
    use crate::modules::auth::middleware::FoodieAuth;

    pub struct Payload {
        pub auth: FoodieAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::modules::planned_meal::repository::Totals;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PlannedMealRemoved(Totals),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlannedMealRemoved(totals) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Meal removed from your plan", "totals": totals })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        PlannedMealNotFound,
        FailedToRemovePlannedMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlannedMealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Planned meal not found" })),
                )
                    .into_response(),
                Self::FailedToRemovePlannedMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to remove planned meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
