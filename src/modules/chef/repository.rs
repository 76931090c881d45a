use crate::utils::storage::UploadedMedia;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgExecutor};
use ulid::Ulid;

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Chef {
    pub id: String,
    pub account_id: String,
    pub business_name: String,
    pub location: String,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub food_types: Json<Vec<String>>,
    pub base_location: Option<String>,
    pub delivery_zones: Json<Vec<String>>,
    pub payout_number: Option<String>,
    pub profile_photo: Option<Json<UploadedMedia>>,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateChefPayload {
    pub account_id: String,
    pub business_name: String,
    pub location: String,
    pub bio: Option<String>,
    pub food_types: Vec<String>,
}

pub struct UpdateChefPayload {
    pub business_name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

pub struct UpdateLogisticsPayload {
    pub base_location: String,
    pub delivery_zones: Vec<String>,
    pub payout_number: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateChefPayload) -> Result<Chef> {
    sqlx::query_as::<_, Chef>(
        "
        INSERT INTO chefs (id, account_id, business_name, location, bio, food_types)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.account_id.clone())
    .bind(payload.business_name)
    .bind(payload.location)
    .bind(payload.bio)
    .bind(Json(payload.food_types))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating chef profile for account {}: {}",
            payload.account_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Chef>> {
    sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching chef {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_account_id<'e, E: PgExecutor<'e>>(
    e: E,
    account_id: String,
) -> Result<Option<Chef>> {
    sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE account_id = $1")
        .bind(account_id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching chef of account {}: {}",
                account_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_approved<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Chef>> {
    sqlx::query_as::<_, Chef>(
        "SELECT * FROM chefs WHERE is_approved = TRUE ORDER BY created_at DESC",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching approved chefs: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_pending<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Chef>> {
    sqlx::query_as::<_, Chef>(
        "SELECT * FROM chefs WHERE is_approved = FALSE ORDER BY created_at DESC",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching pending chefs: {}", err);
        Error::UnexpectedError
    })
}

pub async fn approve<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Chef>> {
    sqlx::query_as::<_, Chef>(
        "
        UPDATE chefs
        SET is_approved = TRUE, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while approving chef {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateChefPayload,
) -> Result<Chef> {
    sqlx::query_as::<_, Chef>(
        "
        UPDATE chefs
        SET
            business_name = COALESCE($2, business_name),
            bio = COALESCE($3, bio),
            location = COALESCE($4, location),
            phone = COALESCE($5, phone),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(payload.business_name)
    .bind(payload.bio)
    .bind(payload.location)
    .bind(payload.phone)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating chef {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn update_logistics_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateLogisticsPayload,
) -> Result<Chef> {
    sqlx::query_as::<_, Chef>(
        "
        UPDATE chefs
        SET
            base_location = $2,
            delivery_zones = $3,
            payout_number = $4,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(payload.base_location)
    .bind(Json(payload.delivery_zones))
    .bind(payload.payout_number)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating logistics of chef {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn update_photo_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    photo: UploadedMedia,
) -> Result<Chef> {
    sqlx::query_as::<_, Chef>(
        "
        UPDATE chefs
        SET profile_photo = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(Json(photo))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating photo of chef {}: {}", id, err);
        Error::UnexpectedError
    })
}
