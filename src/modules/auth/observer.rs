use super::role::{Error, Identity, IdentityResolver};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{
    broadcast::{self, error::RecvError},
    RwLock,
};

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    SignedIn {
        session_id: String,
        account_id: String,
    },
    SignedOut {
        session_id: String,
    },
    ProfileChanged {
        account_id: String,
    },
}

/// Keeps a role cache per live session, refreshed from the session event
/// stream. Route gates never read from it.
#[derive(Clone)]
pub struct SessionObserver {
    tx: broadcast::Sender<SessionEvent>,
    identities: Arc<RwLock<HashMap<String, Identity>>>,
    resolver: Arc<dyn IdentityResolver>,
}

impl SessionObserver {
    pub fn new(resolver: Arc<dyn IdentityResolver>) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);

        Self {
            tx,
            identities: Arc::new(RwLock::new(HashMap::new())),
            resolver,
        }
    }

    pub fn resolver(&self) -> Arc<dyn IdentityResolver> {
        self.resolver.clone()
    }

    pub fn publish(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("No session observer is listening");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    pub fn spawn(&self) -> tokio::task::JoinHandle<()> {
        let observer = self.clone();
        let mut rx = self.subscribe();

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => observer.handle(event).await,
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Session observer skipped {} events", skipped);
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            tracing::debug!("Session event stream closed");
        })
    }

    pub async fn handle(&self, event: SessionEvent) {
        tracing::debug!("Handling session event: {:?}", event);

        match event {
            SessionEvent::SignedIn {
                session_id,
                account_id,
            } => match self.resolver.resolve(&account_id).await {
                Ok(identity) => {
                    self.identities.write().await.insert(session_id, identity);
                }
                Err(err) => {
                    tracing::error!(
                        "Failed to resolve identity for account {}: {:?}",
                        account_id,
                        err
                    );
                }
            },
            SessionEvent::SignedOut { session_id } => {
                self.identities.write().await.remove(&session_id);
            }
            SessionEvent::ProfileChanged { account_id } => {
                let sessions = self
                    .identities
                    .read()
                    .await
                    .iter()
                    .filter(|(_, identity)| identity.account_id == account_id)
                    .map(|(session_id, _)| session_id.clone())
                    .collect::<Vec<_>>();

                if sessions.is_empty() {
                    return;
                }

                let resolved = self.resolver.resolve(&account_id).await;
                let mut identities = self.identities.write().await;
                match resolved {
                    Ok(identity) => {
                        for session_id in sessions {
                            identities.insert(session_id, identity.clone());
                        }
                    }
                    Err(err) => {
                        tracing::error!(
                            "Failed to refresh identity for account {}: {:?}",
                            account_id,
                            err
                        );
                        for session_id in sessions {
                            identities.remove(&session_id);
                        }
                    }
                }
            }
        }
    }

    pub async fn cached(&self, session_id: &str) -> Option<Identity> {
        self.identities.read().await.get(session_id).cloned()
    }

    pub async fn identity(&self, session_id: &str, account_id: &str) -> Result<Identity, Error> {
        if let Some(identity) = self.cached(session_id).await {
            return Ok(identity);
        }

        let identity = self.resolver.resolve(account_id).await?;
        self.identities
            .write()
            .await
            .insert(session_id.to_string(), identity.clone());

        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::role::Role;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryResolver {
        roles: std::sync::Mutex<HashMap<String, Option<Role>>>,
        calls: AtomicUsize,
    }

    impl MemoryResolver {
        fn set(&self, account_id: &str, role: Option<Role>) {
            self.roles
                .lock()
                .unwrap()
                .insert(account_id.to_string(), role);
        }
    }

    #[async_trait]
    impl IdentityResolver for MemoryResolver {
        async fn resolve(&self, account_id: &str) -> Result<Identity, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let role = *self
                .roles
                .lock()
                .unwrap()
                .get(account_id)
                .ok_or(Error::AccountNotFound)?;

            Ok(Identity {
                account_id: account_id.to_string(),
                email: format!("{}@qavaeat.test", account_id),
                role,
                chef_id: None,
            })
        }
    }

    fn observer() -> (SessionObserver, Arc<MemoryResolver>) {
        let resolver = Arc::new(MemoryResolver::default());
        (SessionObserver::new(resolver.clone()), resolver)
    }

    fn signed_in(session_id: &str, account_id: &str) -> SessionEvent {
        SessionEvent::SignedIn {
            session_id: session_id.to_string(),
            account_id: account_id.to_string(),
        }
    }

    #[tokio::test]
    async fn caches_identity_on_sign_in_and_evicts_on_sign_out() {
        let (observer, resolver) = observer();
        resolver.set("acc", Some(Role::Foodie));

        observer.handle(signed_in("s1", "acc")).await;
        assert_eq!(
            observer.cached("s1").await.and_then(|identity| identity.role),
            Some(Role::Foodie)
        );

        observer
            .handle(SessionEvent::SignedOut {
                session_id: "s1".to_string(),
            })
            .await;
        assert_eq!(observer.cached("s1").await, None);
    }

    #[tokio::test]
    async fn profile_changes_refresh_every_session_of_the_account() {
        let (observer, resolver) = observer();
        resolver.set("chef", None);
        resolver.set("other", Some(Role::Foodie));

        observer.handle(signed_in("s1", "chef")).await;
        observer.handle(signed_in("s2", "chef")).await;
        observer.handle(signed_in("s3", "other")).await;

        resolver.set("chef", Some(Role::Chef));
        resolver.set("other", Some(Role::Admin));
        observer
            .handle(SessionEvent::ProfileChanged {
                account_id: "chef".to_string(),
            })
            .await;

        for session in ["s1", "s2"] {
            assert_eq!(
                observer.cached(session).await.and_then(|identity| identity.role),
                Some(Role::Chef)
            );
        }
        assert_eq!(
            observer.cached("s3").await.and_then(|identity| identity.role),
            Some(Role::Foodie)
        );
    }

    #[tokio::test]
    async fn failed_refresh_evicts_the_stale_identity() {
        let (observer, resolver) = observer();
        resolver.set("acc", Some(Role::Chef));
        observer.handle(signed_in("s1", "acc")).await;

        resolver.roles.lock().unwrap().clear();
        observer
            .handle(SessionEvent::ProfileChanged {
                account_id: "acc".to_string(),
            })
            .await;

        assert_eq!(observer.cached("s1").await, None);
    }

    #[tokio::test]
    async fn identity_lookup_falls_back_to_the_resolver_once() {
        let (observer, resolver) = observer();
        resolver.set("acc", Some(Role::Foodie));

        observer.identity("s1", "acc").await.unwrap();
        observer.identity("s1", "acc").await.unwrap();

        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn spawned_task_consumes_published_events() {
        let (observer, resolver) = observer();
        resolver.set("acc", Some(Role::Chef));
        let task = observer.spawn();

        observer.publish(signed_in("s1", "acc"));

        let mut cached = None;
        for _ in 0..50 {
            cached = observer.cached("s1").await;
            if cached.is_some() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(cached.and_then(|identity| identity.role), Some(Role::Chef));

        task.abort();
    }
}
