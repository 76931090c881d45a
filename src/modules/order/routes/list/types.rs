pub mod request {
    use crate::modules::auth::middleware::FoodieAuth;

    pub struct Payload {
        pub auth: FoodieAuth,
    }
}

pub mod response {
    use crate::modules::order::repository::OrderLine;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use sqlx::types::BigDecimal;

    pub enum Success {
        Orders {
            orders: Vec<OrderLine>,
            total_spent: BigDecimal,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders {
                    orders,
                    total_spent,
                } => (
                    StatusCode::OK,
                    Json(json!({ "data": orders, "total_spent": total_spent })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch orders" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
