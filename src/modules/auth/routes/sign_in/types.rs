pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub email: String,
        pub password: String,
    }
}

pub mod response {
    use crate::modules::auth::role::Role;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::NaiveDateTime;
    use serde_json::json;

    pub enum Success {
        SignedIn {
            access_token: String,
            expires_at: NaiveDateTime,
            role: Option<Role>,
            redirect: String,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn {
                    access_token,
                    expires_at,
                    role,
                    redirect,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "access_token": access_token,
                        "expires_at": expires_at,
                        "role": role,
                        "redirect": redirect
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidCredentials,
        AwaitingApproval,
        FailedToSignIn,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "error": "Invalid email or password" })),
                )
                    .into_response(),
                Self::AwaitingApproval => (
                    StatusCode::FORBIDDEN,
                    Json(json!({
                        "error": "ACCESS DENIED: Your account is currently awaiting admin approval."
                    })),
                )
                    .into_response(),
                Self::FailedToSignIn => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to sign in" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
