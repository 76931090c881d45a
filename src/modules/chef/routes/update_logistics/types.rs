pub mod request {
    use crate::modules::auth::middleware::ChefAuth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        #[serde(default)]
        pub base_location: String,
        #[serde(default)]
        pub delivery_zones: Vec<String>,
        #[serde(default)]
        pub payout_number: String,
    }

    pub struct Payload {
        pub auth: ChefAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::chef::repository::Chef;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LogisticsUpdated(Chef),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LogisticsUpdated(chef) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Logistics updated",
                        "data": {
                            "base_location": chef.base_location,
                            "delivery_zones": chef.delivery_zones,
                            "payout_number": chef.payout_number
                        }
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotOnboarded,
        FailedToUpdateLogistics,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToUpdateLogistics => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update logistics" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
