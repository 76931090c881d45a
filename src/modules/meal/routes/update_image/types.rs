pub mod request {
    use crate::modules::auth::middleware::ChefAuth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub image: FieldData<NamedTempFile>,
    }

    pub struct Payload {
        pub auth: ChefAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::meal::repository::Meal;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ImageUpdated(Meal),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageUpdated(meal) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Meal image updated", "data": meal })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MealNotFound,
        NotMealOwner,
        FailedToUploadImage,
        FailedToUpdateMeal,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Meal not found" })),
                )
                    .into_response(),
                Self::NotMealOwner => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You can only manage your own meals" })),
                )
                    .into_response(),
                Self::FailedToUploadImage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload image" })),
                )
                    .into_response(),
                Self::FailedToUpdateMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
