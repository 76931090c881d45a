pub mod request {
    use crate::modules::auth::middleware::ChefAuth;

    pub struct Payload {
        pub auth: ChefAuth,
        pub id: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MealDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MealDeleted => {
                    (StatusCode::OK, Json(json!({ "message": "Meal deleted" }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MealNotFound,
        NotMealOwner,
        MealInUse,
        FailedToDeleteMeal,
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
                Self::MealInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Meal is in use" })),
                )
                    .into_response(),
                Self::FailedToDeleteMeal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete meal" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod tests {
    use super::response;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn meal_still_referenced_is_a_conflict() {
        let res = response::Error::MealInUse.into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Meal is in use");
    }
}
