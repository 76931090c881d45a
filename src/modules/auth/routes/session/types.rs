pub mod request {
    use crate::modules::auth::repository::session::Session;

    pub struct Payload {
        pub session: Session,
    }
}

pub mod response {
    use crate::modules::auth::role::Identity;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Identity(Identity),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Identity(identity) => {
                    (StatusCode::OK, Json(json!({ "data": identity }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        AccountNotFound,
        FailedToFetchSession,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountNotFound => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid session token", "redirect": "/login" })),
                )
                    .into_response(),
                Self::FailedToFetchSession => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch session" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
