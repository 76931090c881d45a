use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

pub const SESSION_LIFETIME_DAYS: i64 = 7;

#[derive(FromRow, Serialize, Clone, Debug)]
pub struct Session {
    pub id: String,
    pub account_id: String,
    pub access_token: String,
    pub expires_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl Session {
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at < now
    }
}

pub struct CreateSessionPayload {
    pub account_id: String,
    pub access_token: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateSessionPayload,
) -> Result<Session, Error> {
    sqlx::query_as::<_, Session>(
        "
        INSERT INTO sessions (id, account_id, access_token, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.account_id.clone())
    .bind(payload.access_token)
    .bind(Utc::now().naive_utc() + chrono::Duration::days(SESSION_LIFETIME_DAYS))
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a new session for account with id {}: {}",
            payload.account_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_access_token<'e, E: PgExecutor<'e>>(
    e: E,
    access_token: String,
) -> Result<Option<Session>, Error> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE access_token = $1")
        .bind(access_token)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching session by access token: {}", err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting session with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_expire_after_their_deadline() {
        let now = Utc::now().naive_utc();
        let session = Session {
            id: "s".to_string(),
            account_id: "a".to_string(),
            access_token: "t".to_string(),
            expires_at: now,
            created_at: now - chrono::Duration::days(SESSION_LIFETIME_DAYS),
        };

        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + chrono::Duration::seconds(1)));
    }
}
