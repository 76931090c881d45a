pub mod request {
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
        match full_name.trim().is_empty() {
            false => Ok(()),
            true => Err(ValidationError::new("INVALID_FULL_NAME")
                .with_message(Cow::from("Full name is required"))),
        }
    }

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(code = "INVALID_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 6,
            code = "INVALID_PASSWORD",
            message = "Password must be at least 6 characters"
        ))]
        pub password: String,
        #[validate(custom(code = "INVALID_FULL_NAME", function = "validate_full_name"))]
        pub full_name: String,
    }

    pub struct Payload {
        pub role: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AccountCreated { id: String, role: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AccountCreated { id, role } => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Account created! You can now sign in",
                        "id": id,
                        "role": role
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        EmailAlreadyInUse,
        SignupFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
