pub mod request {
    use crate::modules::auth::middleware::AdminAuth;

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::modules::admin::overview::Overview;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ChefApproved(Overview),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefApproved(overview) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Chef approved", "data": overview })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotFound,
        FailedToApproveChef,
        FailedToFetchOverview,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Chef not found" })),
                )
                    .into_response(),
                Self::FailedToApproveChef => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to approve chef" })),
                )
                    .into_response(),
                Self::FailedToFetchOverview => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch admin overview" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
