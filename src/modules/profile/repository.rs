use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateProfilePayload {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateProfilePayload,
) -> Result<Profile, Error> {
    sqlx::query_as::<_, Profile>(
        "
        INSERT INTO profiles (id, email, full_name, role)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(payload.id.clone())
    .bind(payload.email)
    .bind(payload.full_name)
    .bind(payload.role)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating profile for account {}: {}",
            payload.id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Profile>, Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching profile {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn update_full_name<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    full_name: String,
) -> Result<Option<Profile>, Error> {
    sqlx::query_as::<_, Profile>(
        "
        UPDATE profiles
        SET full_name = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(full_name)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating profile {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub struct UpdateContactPayload {
    pub location: Option<String>,
    pub phone: Option<String>,
}

/// Absent fields keep their stored value.
pub async fn update_contact<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateContactPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE profiles
        SET
            location = COALESCE($2, location),
            phone = COALESCE($3, phone),
            updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(id.clone())
    .bind(payload.location)
    .bind(payload.phone)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while updating contact of profile {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn count<'e, E: PgExecutor<'e>>(e: E) -> Result<i64, Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting profiles: {}", err);
            Error::UnexpectedError
        })
}
