use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WaitlistKind {
    User,
    Chef,
}

impl WaitlistKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Chef => "chef",
        }
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Joining twice is a no-op.
pub async fn join<'e, E: PgExecutor<'e>>(
    e: E,
    email: String,
    kind: WaitlistKind,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO waitlist (email, kind)
        VALUES ($1, $2)
        ON CONFLICT (email, kind) DO NOTHING
        ",
    )
    .bind(email)
    .bind(kind.as_str())
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while joining the waitlist: {}", err);
        Error::UnexpectedError
    })
}
