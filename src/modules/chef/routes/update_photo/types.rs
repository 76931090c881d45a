pub mod request {
    use crate::modules::auth::middleware::ChefAuth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub photo: FieldData<NamedTempFile>,
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
        PhotoUpdated(Chef),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PhotoUpdated(chef) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Profile photo updated",
                        "url": chef.profile_photo.map(|photo| photo.0.url)
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ChefNotOnboarded,
        FailedToUploadPhoto,
        FailedToUpdatePhoto,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ChefNotOnboarded => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Kitchen profile not created" })),
                )
                    .into_response(),
                Self::FailedToUploadPhoto => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload photo" })),
                )
                    .into_response(),
                Self::FailedToUpdatePhoto => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update profile photo" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
