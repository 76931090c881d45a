pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
        pub id: String,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCompleted(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCompleted(order) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order marked as completed", "data": order })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        NotOrderChef,
        FailedToCompleteOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::NotOrderChef => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "This order belongs to another kitchen" })),
                )
                    .into_response(),
                Self::FailedToCompleteOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to complete order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
