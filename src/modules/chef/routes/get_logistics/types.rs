pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Logistics {
            base_location: Option<String>,
            delivery_zones: Vec<String>,
            payout_number: Option<String>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Logistics {
                    base_location,
                    delivery_zones,
                    payout_number,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "data": {
                            "base_location": base_location,
                            "delivery_zones": delivery_zones,
                            "payout_number": payout_number
                        }
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotOnboarded,
        FailedToFetchLogistics,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToFetchLogistics => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch logistics" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
