pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PlanDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlanDeleted => {
                    (StatusCode::OK, Json(json!({ "message": "Menu plan deleted" }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        PlanNotFound,
        NotPlanOwner,
        FailedToDeletePlan,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PlanNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Menu plan not found" })),
                )
                    .into_response(),
                Self::NotPlanOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only manage your own plans" })),
                )
                    .into_response(),
                Self::FailedToDeletePlan => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete menu plan" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
