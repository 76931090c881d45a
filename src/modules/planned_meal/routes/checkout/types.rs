pub mod request {
    use crate::modules::{auth::middleware::FoodieAuth, planned_meal::checkout::Delivery};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        #[serde(default)]
        pub address: String,
        pub delivery: Delivery,
    }

    pub struct Payload {
        pub auth: FoodieAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::planned_meal::{
        checkout::{CheckoutError, DeliverySlot},
        repository::Totals,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AwaitingPayment {
            address: String,
            delivery: DeliverySlot,
            totals: Totals,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AwaitingPayment {
                    address,
                    delivery,
                    totals,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "status": "awaiting_payment",
                        "next": "/payment-success",
                        "address": address,
                        "delivery": delivery,
                        "totals": totals
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidCheckout(CheckoutError),
        FailedToCheckout,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidCheckout(err) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.message() })),
                )
                    .into_response(),
                Self::FailedToCheckout => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to prepare checkout" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
