use super::super::repository::session::{self, Session};
use crate::types::Context;
use chrono::Utc;
use ulid::Ulid;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session(ctx: &Context, account_id: String) -> Result<Session> {
    session::create(
        &ctx.db_conn.pool,
        session::CreateSessionPayload {
            account_id,
            access_token: Ulid::new().to_string(),
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_access_token(ctx: &Context, access_token: String) -> Result<Session> {
    let session = session::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.is_expired(Utc::now().naive_utc()) {
        return Err(Error::ExpiredToken);
    }

    Ok(session)
}

pub async fn end_session(ctx: &Context, session: Session) -> Result<()> {
    session::delete_by_id(&ctx.db_conn.pool, session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}
