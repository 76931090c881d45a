pub mod request {
    use crate::modules::auth::repository::session::Session;

    pub struct Payload {
        pub session: Session,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        SignedOut,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedOut => (
                    StatusCode::OK,
                    Json(json!({ "message": "Signed out", "redirect": "/" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToSignOut,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToSignOut => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to sign out" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
