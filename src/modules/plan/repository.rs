use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal, FromRow, PgExecutor};
use std::fmt;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum PlanDuration {
    Weekly,
    Monthly,
}

impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => f.write_str("Weekly"),
            Self::Monthly => f.write_str("Monthly"),
        }
    }
}

impl TryFrom<String> for PlanDuration {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.as_ref() {
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            other => Err(format!("Unknown plan duration: {}", other)),
        }
    }
}

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct MenuPlan {
    pub id: String,
    pub chef_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    #[sqlx(try_from = "String")]
    pub duration: PlanDuration,
    pub meals_per_week: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

pub struct CreateMenuPlanPayload {
    pub chef_id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub duration: PlanDuration,
    pub meals_per_week: i32,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMenuPlanPayload,
) -> Result<MenuPlan, Error> {
    sqlx::query_as::<_, MenuPlan>(
        "
        INSERT INTO menu_plans (id, chef_id, title, description, price, duration, meals_per_week)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.chef_id.clone())
    .bind(payload.title)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.duration.to_string())
    .bind(payload.meals_per_week)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating a menu plan for chef {}: {}",
            payload.chef_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuPlan>, Error> {
    sqlx::query_as::<_, MenuPlan>("SELECT * FROM menu_plans WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching menu plan {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_chef_id<'e, E: PgExecutor<'e>>(
    e: E,
    chef_id: String,
) -> Result<Vec<MenuPlan>, Error> {
    sqlx::query_as::<_, MenuPlan>(
        "SELECT * FROM menu_plans WHERE chef_id = $1 ORDER BY created_at DESC",
    )
    .bind(chef_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching menu plans of chef {}: {}",
            chef_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM menu_plans WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting menu plan {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_round_trip_through_their_column_text() {
        for duration in [PlanDuration::Weekly, PlanDuration::Monthly] {
            assert_eq!(PlanDuration::try_from(duration.to_string()), Ok(duration));
        }
        assert!(PlanDuration::try_from("weekly".to_string()).is_err());
    }
}
