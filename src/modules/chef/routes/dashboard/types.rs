pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
    }
}

pub mod response {
    use crate::modules::chef::repository::Chef;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Dashboard { chef: Chef, meal_count: i64 },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dashboard { chef, meal_count } => (
                    StatusCode::OK,
                    Json(json!({ "data": { "chef": chef, "meal_count": meal_count } })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotOnboarded,
        FailedToFetchDashboard,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": "Kitchen profile not created",
                        "redirect": "/chef-onboarding"
                    })),
                )
                    .into_response(),
                Self::FailedToFetchDashboard => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch dashboard" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
