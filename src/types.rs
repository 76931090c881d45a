pub use crate::utils::database;
use crate::modules::auth::{
    observer::SessionObserver,
    role::{self, DatabaseResolver, RoleSource},
};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageContext {
    pub api_key: String,
    pub api_secret: String,
    pub upload_endpoint: String,
    pub delete_endpoint: String,
    pub upload_preset: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub storage: StorageContext,
    pub observer: SessionObserver,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct StorageConfig {
    pub api_key: String,
    pub api_secret: String,
    pub upload_endpoint: String,
    pub delete_endpoint: String,
    pub upload_preset: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub role_source: RoleSource,
    pub admin_email: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

/// Normalized the same way sign-up stores emails. Blank means unset.
fn admin_email(raw: Option<String>) -> Option<String> {
    raw.map(|email| role::normalize_email(&email))
        .filter(|email| !email.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let storage_api_key = env::var("STORAGE_API_KEY").expect("STORAGE_API_KEY not set");
        let storage_api_secret =
            env::var("STORAGE_API_SECRET").expect("STORAGE_API_SECRET not set");
        let storage_upload_endpoint =
            env::var("STORAGE_UPLOAD_ENDPOINT").expect("STORAGE_UPLOAD_ENDPOINT not set");
        let storage_delete_endpoint =
            env::var("STORAGE_DELETE_ENDPOINT").expect("STORAGE_DELETE_ENDPOINT not set");
        let storage_upload_preset =
            env::var("STORAGE_UPLOAD_PRESET").expect("STORAGE_UPLOAD_PRESET not set");
        let role_source = env::var("ROLE_SOURCE")
            .map(|raw| raw.parse::<RoleSource>().expect("Invalid ROLE_SOURCE"))
            .unwrap_or(RoleSource::Profile);
        let admin_email = admin_email(env::var("ADMIN_EMAIL").ok());

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                port,
                url,
            },
            storage: StorageConfig {
                api_key: storage_api_key,
                api_secret: storage_api_secret,
                upload_endpoint: storage_upload_endpoint,
                delete_endpoint: storage_delete_endpoint,
                upload_preset: storage_upload_preset,
            },
            auth: AuthConfig {
                role_source,
                admin_email,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        let observer = SessionObserver::new(Arc::new(DatabaseResolver {
            pool: db_conn.pool.clone(),
            source: self.auth.role_source,
            admin_email: self.auth.admin_email,
        }));
        observer.spawn();

        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            storage: StorageContext {
                api_key: self.storage.api_key,
                api_secret: self.storage.api_secret,
                upload_endpoint: self.storage.upload_endpoint,
                delete_endpoint: self.storage.delete_endpoint,
                upload_preset: self.storage.upload_preset,
            },
            observer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_email_is_trimmed_and_lowercased() {
        assert_eq!(
            admin_email(Some("  Desk@Qavaeat.COM\n".to_string())),
            Some("desk@qavaeat.com".to_string())
        );
    }

    #[test]
    fn blank_admin_email_is_unset() {
        assert_eq!(admin_email(Some("   ".to_string())), None);
        assert_eq!(admin_email(None), None);
    }
}
