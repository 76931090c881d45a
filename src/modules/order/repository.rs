use super::prep::PrepItem;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal, FromRow, PgExecutor};

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Order {
    pub id: String,
    pub account_id: String,
    pub meal_id: String,
    pub chef_id: String,
    pub amount_paid: Option<BigDecimal>,
    pub week_number: i32,
    pub day_text: String,
    pub time_slot: String,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct OrderLine {
    pub id: String,
    pub meal_id: String,
    pub chef_id: String,
    pub amount_paid: Option<BigDecimal>,
    pub week_number: i32,
    pub day_text: String,
    pub time_slot: String,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub meal_name: String,
    pub meal_price: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_lines_by_account_id<'e, E: PgExecutor<'e>>(
    e: E,
    account_id: String,
) -> Result<Vec<OrderLine>> {
    sqlx::query_as::<_, OrderLine>(
        "
        SELECT
            orders.id,
            orders.meal_id,
            orders.chef_id,
            orders.amount_paid,
            orders.week_number,
            orders.day_text,
            orders.time_slot,
            orders.is_completed,
            orders.created_at,
            meals.name AS meal_name,
            meals.price AS meal_price
        FROM orders
        INNER JOIN meals ON meals.id = orders.meal_id
        WHERE orders.account_id = $1
        ORDER BY orders.created_at DESC
        ",
    )
    .bind(account_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of account {}: {}",
            account_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_prep_items_by_chef_id<'e, E: PgExecutor<'e>>(
    e: E,
    chef_id: String,
) -> Result<Vec<PrepItem>> {
    sqlx::query_as::<_, PrepItem>(
        "
        SELECT
            meals.name AS meal_name,
            orders.week_number,
            orders.day_text,
            orders.time_slot,
            orders.is_completed
        FROM orders
        INNER JOIN meals ON meals.id = orders.meal_id
        WHERE orders.chef_id = $1
        ORDER BY orders.created_at ASC
        ",
    )
    .bind(chef_id.clone())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching prep items of chef {}: {}",
            chef_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_all_amounts_paid<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Option<BigDecimal>>> {
    sqlx::query_scalar::<_, Option<BigDecimal>>("SELECT amount_paid FROM orders")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order amounts: {}", err);
            Error::UnexpectedError
        })
}

pub async fn mark_completed<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders
        SET is_completed = TRUE
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while completing order {}: {}", id, err);
        Error::UnexpectedError
    })
}
