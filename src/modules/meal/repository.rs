use crate::utils::{database, storage::UploadedMedia};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{
    types::{BigDecimal, Json},
    FromRow, PgExecutor,
};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AddOn {
    pub name: String,
    pub price: BigDecimal,
}

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Meal {
    pub id: String,
    pub chef_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: Option<String>,
    pub add_ons: Json<Vec<AddOn>>,
    pub image: Option<Json<UploadedMedia>>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateMealPayload {
    pub chef_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: Option<String>,
    pub add_ons: Vec<AddOn>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    MealInUse,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateMealPayload) -> Result<Meal> {
    sqlx::query_as::<_, Meal>(
        "
        INSERT INTO meals (id, chef_id, name, description, price, category, add_ons)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.chef_id.clone())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.category)
    .bind(Json(payload.add_ons))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a meal for chef {}: {}",
            payload.chef_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Meal>> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching meal {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_chef_id<'e, E: PgExecutor<'e>>(
    e: E,
    chef_id: String,
) -> Result<Vec<Meal>> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE chef_id = $1 ORDER BY created_at DESC")
        .bind(chef_id.clone())
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching meals of chef {}: {}", chef_id, err);
            Error::UnexpectedError
        })
}

pub async fn count_by_chef_id<'e, E: PgExecutor<'e>>(e: E, chef_id: String) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM meals WHERE chef_id = $1")
        .bind(chef_id.clone())
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting meals of chef {}: {}", chef_id, err);
            Error::UnexpectedError
        })
}

pub async fn update_image_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    image: UploadedMedia,
) -> Result<Meal> {
    sqlx::query_as::<_, Meal>(
        "
        UPDATE meals
        SET image = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(Json(image))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating image of meal {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM meals WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            if database::is_foreign_key_violation(&err) {
                tracing::warn!("Meal {} is still planned or ordered", id);
                return Error::MealInUse;
            }
            tracing::error!("Error occurred while deleting meal {}: {}", id, err);
            Error::UnexpectedError
        })
}
