pub mod request {
    pub struct Payload {
        pub chef_id: String,
    }
}

pub mod response {
    use crate::modules::plan::repository::MenuPlan;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Plans(Vec<MenuPlan>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Plans(plans) => (StatusCode::OK, Json(json!({ "data": plans }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPlans,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPlans => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch menu plans" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
