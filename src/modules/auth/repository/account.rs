use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgExecutor};
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct AccountMetadata {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(FromRow, Clone, Debug)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub metadata: Json<AccountMetadata>,
    pub created_at: NaiveDateTime,
}

pub struct CreateAccountPayload {
    pub email: String,
    pub password_hash: String,
    pub metadata: AccountMetadata,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateAccountPayload) -> Result<Account> {
    sqlx::query_as::<_, Account>(
        "
        INSERT INTO accounts (id, email, password_hash, metadata)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.password_hash)
    .bind(Json(payload.metadata))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Account>> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching account with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<Account>> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching account by email: {}", err);
            Error::UnexpectedError
        })
}
