pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::{chef::repository::Chef, meal::repository::Meal};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Chef { chef: Chef, meals: Vec<Meal> },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Chef { chef, meals } => (
                    StatusCode::OK,
                    Json(json!({ "data": { "chef": chef, "meals": meals } })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotFound,
        FailedToFetchChef,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen not found" })),
                )
                    .into_response(),
                Self::FailedToFetchChef => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch kitchen" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
