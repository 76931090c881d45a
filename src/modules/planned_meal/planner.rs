use super::repository::{self, PlannedMealLine, StatusFilter, Totals};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// A foodie's planned meals as the delete flow sees them.
#[async_trait]
pub trait Planner: Send + Sync {
    /// Removes one row the account owns. `false` when nothing matched.
    async fn remove(&self, id: String, account_id: String) -> Result<bool, Error>;
    async fn active_lines(&self, account_id: String) -> Result<Vec<PlannedMealLine>, Error>;
}

pub struct DatabasePlanner {
    pub pool: PgPool,
}

#[async_trait]
impl Planner for DatabasePlanner {
    async fn remove(&self, id: String, account_id: String) -> Result<bool, Error> {
        repository::delete_by_id_and_account_id(&self.pool, id, account_id)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn active_lines(&self, account_id: String) -> Result<Vec<PlannedMealLine>, Error> {
        repository::find_lines_by_account_id(&self.pool, account_id, StatusFilter::Active)
            .await
            .map_err(|_| Error::UnexpectedError)
    }
}

#[derive(Debug, PartialEq)]
pub enum RemoveError {
    NotFound,
    Failed,
}

/// Totals are only recomputed after a row actually went away, so a line
/// never leaves the totals twice.
pub async fn remove_line(
    planner: &dyn Planner,
    id: String,
    account_id: String,
) -> Result<Totals, RemoveError> {
    let removed = planner
        .remove(id, account_id.clone())
        .await
        .map_err(|_| RemoveError::Failed)?;

    if !removed {
        return Err(RemoveError::NotFound);
    }

    planner
        .active_lines(account_id)
        .await
        .map(|lines| repository::totals(&lines))
        .map_err(|_| RemoveError::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::planned_meal::repository::{PAID, PENDING};
    use chrono::Utc;
    use sqlx::types::BigDecimal;
    use std::{str::FromStr, sync::Mutex};

    /// Rows keyed by owning account, deleted the way `DELETE ... WHERE id AND
    /// account_id` does.
    struct MemoryPlanner {
        rows: Mutex<Vec<(String, PlannedMealLine)>>,
    }

    #[async_trait]
    impl Planner for MemoryPlanner {
        async fn remove(&self, id: String, account_id: String) -> Result<bool, Error> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|(owner, line)| !(line.id == id && *owner == account_id));
            Ok(before - rows.len() == 1)
        }

        async fn active_lines(&self, account_id: String) -> Result<Vec<PlannedMealLine>, Error> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|(owner, line)| *owner == account_id && line.payment_status == PENDING)
                .map(|(_, line)| line.clone())
                .collect())
        }
    }

    fn row(owner: &str, id: &str, price: &str, status: &str) -> (String, PlannedMealLine) {
        (
            owner.to_string(),
            PlannedMealLine {
                id: id.to_string(),
                meal_id: format!("meal-{}", id),
                chef_id: "chef".to_string(),
                payment_status: status.to_string(),
                created_at: Utc::now().naive_utc(),
                meal_name: "Pilau".to_string(),
                meal_price: BigDecimal::from_str(price).unwrap(),
                meal_image: None,
                chef_business_name: "Pwani Bites".to_string(),
                chef_location: "Mombasa".to_string(),
            },
        )
    }

    fn planner() -> MemoryPlanner {
        MemoryPlanner {
            rows: Mutex::new(vec![
                row("amina", "a", "450.50", PENDING),
                row("amina", "b", "0.25", PENDING),
                row("amina", "c", "450.50", PENDING),
                row("amina", "d", "999", PAID),
                row("otieno", "e", "300", PENDING),
            ]),
        }
    }

    fn dec(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[tokio::test]
    async fn removing_a_line_subtracts_it_once() {
        let planner = planner();

        let totals = remove_line(&planner, "a".to_string(), "amina".to_string())
            .await
            .unwrap();
        assert_eq!(
            totals,
            Totals {
                count: 2,
                sum: dec("450.75")
            }
        );

        let again = remove_line(&planner, "a".to_string(), "amina".to_string()).await;
        assert_eq!(again, Err(RemoveError::NotFound));

        let lines = planner.active_lines("amina".to_string()).await.unwrap();
        assert_eq!(repository::totals(&lines).sum, dec("450.75"));
    }

    #[tokio::test]
    async fn other_accounts_lines_are_not_found() {
        let planner = planner();

        let result = remove_line(&planner, "e".to_string(), "amina".to_string()).await;

        assert_eq!(result, Err(RemoveError::NotFound));
        let lines = planner.active_lines("otieno".to_string()).await.unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn paid_lines_stay_out_of_the_totals() {
        let planner = planner();

        let totals = remove_line(&planner, "b".to_string(), "amina".to_string())
            .await
            .unwrap();

        assert_eq!(
            totals,
            Totals {
                count: 2,
                sum: dec("901.00")
            }
        );
    }
}
