pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
    }
}

pub mod response {
    use crate::modules::order::prep::WeekPrep;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PrepSummary(Vec<WeekPrep>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PrepSummary(weeks) => {
                    (StatusCode::OK, Json(json!({ "data": weeks }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        ChefNotOnboarded,
        FailedToFetchPrepSummary,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToFetchPrepSummary => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch prep summary" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
