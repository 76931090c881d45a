pub mod request {
    use crate::modules::{auth::middleware::FoodieAuth, planned_meal::repository::StatusFilter};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        #[serde(default)]
        pub status: StatusFilter,
    }

    pub struct Payload {
        pub auth: FoodieAuth,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::planned_meal::repository::{PlannedMealLine, Totals};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PlannedMeals {
            lines: Vec<PlannedMealLine>,
            totals: Totals,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlannedMeals { lines, totals } => (
                    StatusCode::OK,
                    Json(json!({ "data": lines, "totals": totals })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPlannedMeals,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPlannedMeals => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch planned meals" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
