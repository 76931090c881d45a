use crate::{
    modules::{
        auth::observer::{SessionEvent, SessionObserver},
        chef::{self, repository::Chef},
        order, profile,
    },
    utils::money,
};
use async_trait::async_trait;
use serde::Serialize;
use sqlx::{types::BigDecimal, PgPool};

#[derive(Serialize, Clone, Debug)]
pub struct Overview {
    pub pending_chefs: Vec<Chef>,
    pub pending_count: usize,
    pub profile_count: i64,
    pub total_revenue: BigDecimal,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub fn summarize(
    pending_chefs: Vec<Chef>,
    profile_count: i64,
    amounts_paid: &[Option<BigDecimal>],
) -> Overview {
    Overview {
        pending_count: pending_chefs.len(),
        pending_chefs,
        profile_count,
        total_revenue: money::sum(amounts_paid.iter().map(Option::as_ref)),
    }
}

pub async fn load(pool: &PgPool) -> Result<Overview, Error> {
    let pending_chefs = chef::repository::find_many_pending(pool)
        .await
        .map_err(|_| Error::UnexpectedError)?;
    let profile_count = profile::repository::count(pool)
        .await
        .map_err(|_| Error::UnexpectedError)?;
    let amounts_paid = order::repository::find_all_amounts_paid(pool)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok(summarize(pending_chefs, profile_count, &amounts_paid))
}

/// The chef table as the admin desk sees it.
#[async_trait]
pub trait ApprovalDesk: Send + Sync {
    /// Flags exactly one chef as approved. `None` when the id is unknown.
    async fn approve(&self, chef_id: String) -> Result<Option<Chef>, Error>;
    async fn overview(&self) -> Result<Overview, Error>;
}

pub struct DatabaseDesk {
    pub pool: PgPool,
}

#[async_trait]
impl ApprovalDesk for DatabaseDesk {
    async fn approve(&self, chef_id: String) -> Result<Option<Chef>, Error> {
        chef::repository::approve(&self.pool, chef_id)
            .await
            .map_err(|_| Error::UnexpectedError)
    }

    async fn overview(&self) -> Result<Overview, Error> {
        load(&self.pool).await
    }
}

#[derive(Debug, PartialEq)]
pub enum ApprovalError {
    ChefNotFound,
    ApproveFailed,
    ReloadFailed,
}

/// Approves one chef, tells the observer the account changed, then reads the
/// overview back after the write.
pub async fn approve(
    desk: &dyn ApprovalDesk,
    observer: &SessionObserver,
    chef_id: String,
) -> Result<(Chef, Overview), ApprovalError> {
    let chef = desk
        .approve(chef_id)
        .await
        .map_err(|_| ApprovalError::ApproveFailed)?
        .ok_or(ApprovalError::ChefNotFound)?;

    observer.publish(SessionEvent::ProfileChanged {
        account_id: chef.account_id.clone(),
    });

    let overview = desk
        .overview()
        .await
        .map_err(|_| ApprovalError::ReloadFailed)?;

    Ok((chef, overview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::role::{self, Identity, IdentityResolver};
    use chrono::Utc;
    use sqlx::types::Json;
    use std::{str::FromStr, sync::Arc, sync::Mutex};
    use tokio::sync::broadcast::error::TryRecvError;

    struct NoAccounts;

    #[async_trait]
    impl IdentityResolver for NoAccounts {
        async fn resolve(&self, _account_id: &str) -> Result<Identity, role::Error> {
            Err(role::Error::AccountNotFound)
        }
    }

    /// Mirrors the `chefs` table: newest first, approval flips one flag.
    struct MemoryDesk {
        chefs: Mutex<Vec<Chef>>,
    }

    impl MemoryDesk {
        fn new(chefs: Vec<Chef>) -> Self {
            Self {
                chefs: Mutex::new(chefs),
            }
        }
    }

    #[async_trait]
    impl ApprovalDesk for MemoryDesk {
        async fn approve(&self, chef_id: String) -> Result<Option<Chef>, Error> {
            let mut chefs = self.chefs.lock().unwrap();
            Ok(chefs.iter_mut().find(|chef| chef.id == chef_id).map(|chef| {
                chef.is_approved = true;
                chef.clone()
            }))
        }

        async fn overview(&self) -> Result<Overview, Error> {
            let pending = self
                .chefs
                .lock()
                .unwrap()
                .iter()
                .filter(|chef| !chef.is_approved)
                .cloned()
                .collect();
            Ok(summarize(pending, 7, &[]))
        }
    }

    fn snapshot(overview: &Overview) -> Vec<(String, String, bool)> {
        overview
            .pending_chefs
            .iter()
            .map(|chef| (chef.id.clone(), chef.business_name.clone(), chef.is_approved))
            .collect()
    }

    fn dec(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    fn pending(id: &str) -> Chef {
        Chef {
            id: id.to_string(),
            account_id: format!("acc-{}", id),
            business_name: format!("Kitchen {}", id),
            location: "Nairobi".to_string(),
            bio: None,
            phone: None,
            food_types: Json(vec![]),
            base_location: None,
            delivery_zones: Json(vec![]),
            payout_number: None,
            profile_photo: None,
            is_approved: false,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn revenue_is_the_exact_sum_with_nulls_as_zero() {
        let amounts = vec![Some(dec("1999.99")), None, Some(dec("0.01")), Some(dec("250.5"))];
        let overview = summarize(vec![], 12, &amounts);

        assert_eq!(overview.total_revenue, dec("2250.50"));
        assert_eq!(overview.profile_count, 12);
    }

    #[test]
    fn no_orders_means_zero_revenue() {
        assert_eq!(summarize(vec![], 0, &[]).total_revenue, money::zero());
    }

    #[tokio::test]
    async fn approving_removes_exactly_that_chef() {
        let mut live = pending("z");
        live.is_approved = true;
        let desk = MemoryDesk::new(vec![pending("c"), pending("b"), live, pending("a")]);
        let observer = SessionObserver::new(Arc::new(NoAccounts));
        let mut events = observer.subscribe();
        let before = snapshot(&desk.overview().await.unwrap());

        let (chef, overview) = approve(&desk, &observer, "b".to_string()).await.unwrap();

        assert_eq!(chef.id, "b");
        assert!(chef.is_approved);
        let expected = before
            .into_iter()
            .filter(|(id, _, _)| id != "b")
            .collect::<Vec<_>>();
        assert_eq!(snapshot(&overview), expected);
        assert_eq!(overview.pending_count, 2);
        assert_eq!(
            events.try_recv(),
            Ok(SessionEvent::ProfileChanged {
                account_id: "acc-b".to_string()
            })
        );
    }

    #[tokio::test]
    async fn unknown_chef_leaves_the_pending_list_alone() {
        let desk = MemoryDesk::new(vec![pending("c"), pending("b")]);
        let observer = SessionObserver::new(Arc::new(NoAccounts));
        let mut events = observer.subscribe();
        let before = snapshot(&desk.overview().await.unwrap());

        let result = approve(&desk, &observer, "nope".to_string()).await;

        assert!(matches!(result, Err(ApprovalError::ChefNotFound)));
        assert_eq!(snapshot(&desk.overview().await.unwrap()), before);
        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn approving_twice_is_harmless() {
        let desk = MemoryDesk::new(vec![pending("c"), pending("b")]);
        let observer = SessionObserver::new(Arc::new(NoAccounts));

        approve(&desk, &observer, "c".to_string()).await.unwrap();
        let (_, overview) = approve(&desk, &observer, "c".to_string()).await.unwrap();

        assert_eq!(snapshot(&overview), vec![("b".to_string(), "Kitchen b".to_string(), false)]);
    }

    #[test]
    fn pending_count_tracks_the_listed_chefs() {
        let overview = summarize(vec![pending("b"), pending("a")], 3, &[]);

        assert_eq!(overview.pending_count, 2);
        let ids = overview
            .pending_chefs
            .iter()
            .map(|chef| chef.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
