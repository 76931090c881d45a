use crate::utils::{money, storage::UploadedMedia};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{
    types::{BigDecimal, Json},
    FromRow, PgExecutor,
};
use ulid::Ulid;

pub const PENDING: &str = "pending";
pub const PAID: &str = "paid";

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn payment_status(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some(PENDING),
            Self::Completed => Some(PAID),
        }
    }
}

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct PlannedMeal {
    pub id: String,
    pub account_id: String,
    pub meal_id: String,
    pub chef_id: String,
    pub payment_status: String,
    pub created_at: NaiveDateTime,
}

/// A planned meal joined with what the planner shows about its meal and
/// kitchen.
#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct PlannedMealLine {
    pub id: String,
    pub meal_id: String,
    pub chef_id: String,
    pub payment_status: String,
    pub created_at: NaiveDateTime,
    pub meal_name: String,
    pub meal_price: BigDecimal,
    pub meal_image: Option<Json<UploadedMedia>>,
    pub chef_business_name: String,
    pub chef_location: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub sum: BigDecimal,
}

pub fn totals(lines: &[PlannedMealLine]) -> Totals {
    Totals {
        count: lines.len(),
        sum: money::sum(lines.iter().map(|line| Some(&line.meal_price))),
    }
}

pub struct CreatePlannedMealPayload {
    pub account_id: String,
    pub meal_id: String,
    pub chef_id: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreatePlannedMealPayload,
) -> Result<PlannedMeal, Error> {
    sqlx::query_as::<_, PlannedMeal>(
        "
        INSERT INTO planned_meals (id, account_id, meal_id, chef_id, payment_status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.account_id.clone())
    .bind(payload.meal_id)
    .bind(payload.chef_id)
    .bind(PENDING)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while planning a meal for account {}: {}",
            payload.account_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_lines_by_account_id<'e, E: PgExecutor<'e>>(
    e: E,
    account_id: String,
    filter: StatusFilter,
) -> Result<Vec<PlannedMealLine>, Error> {
    sqlx::query_as::<_, PlannedMealLine>(
        "
        SELECT
            planned_meals.id,
            planned_meals.meal_id,
            planned_meals.chef_id,
            planned_meals.payment_status,
            planned_meals.created_at,
            meals.name AS meal_name,
            meals.price AS meal_price,
            meals.image AS meal_image,
            chefs.business_name AS chef_business_name,
            chefs.location AS chef_location
        FROM planned_meals
        INNER JOIN meals ON meals.id = planned_meals.meal_id
        INNER JOIN chefs ON chefs.id = planned_meals.chef_id
        WHERE
            planned_meals.account_id = $1
            AND ($2::VARCHAR IS NULL OR planned_meals.payment_status = $2)
        ORDER BY planned_meals.created_at DESC
        ",
    )
    .bind(account_id.clone())
    .bind(filter.payment_status())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching planned meals of account {}: {}",
            account_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Only removes a row owned by the account. `false` means nothing matched.
pub async fn delete_by_id_and_account_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    account_id: String,
) -> Result<bool, Error> {
    sqlx::query("DELETE FROM planned_meals WHERE id = $1 AND account_id = $2")
        .bind(id.clone())
        .bind(account_id)
        .execute(e)
        .await
        .map(|res| res.rows_affected() == 1)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting planned meal {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;

    fn line(id: &str, price: &str) -> PlannedMealLine {
        PlannedMealLine {
            id: id.to_string(),
            meal_id: format!("meal-{}", id),
            chef_id: "chef".to_string(),
            payment_status: PENDING.to_string(),
            created_at: Utc::now().naive_utc(),
            meal_name: "Pilau".to_string(),
            meal_price: BigDecimal::from_str(price).unwrap(),
            meal_image: None,
            chef_business_name: "Pwani Bites".to_string(),
            chef_location: "Mombasa".to_string(),
        }
    }

    #[test]
    fn totals_sum_meal_prices_exactly() {
        let lines = vec![line("a", "450.50"), line("b", "0.25"), line("c", "1200")];
        let totals = totals(&lines);

        assert_eq!(totals.count, 3);
        assert_eq!(totals.sum, BigDecimal::from_str("1650.75").unwrap());
    }

    #[test]
    fn empty_planner_totals_zero() {
        assert_eq!(totals(&[]).sum, money::zero());
    }

    #[test]
    fn status_filters_map_to_payment_status() {
        assert_eq!(StatusFilter::All.payment_status(), None);
        assert_eq!(StatusFilter::Active.payment_status(), Some("pending"));
        assert_eq!(StatusFilter::Completed.payment_status(), Some("paid"));
    }
}
