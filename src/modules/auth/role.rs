use super::repository::account;
use crate::modules::{chef, profile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Chef,
    Foodie,
    Admin,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "chef" => Some(Self::Chef),
            "foodie" => Some(Self::Foodie),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chef => "chef",
            Self::Foodie => "foodie",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an account's role is read from.
#[derive(Clone, Debug, PartialEq)]
pub enum RoleSource {
    /// `accounts.metadata.role`, written at sign-up.
    Metadata,
    /// `profiles.role`.
    Profile,
}

impl FromStr for RoleSource {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_ref() {
            "metadata" => Ok(Self::Metadata),
            "profile" => Ok(Self::Profile),
            other => Err(format!("Unknown role source: {}", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Identity {
    pub account_id: String,
    pub email: String,
    pub role: Option<Role>,
    pub chef_id: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AccountNotFound,
}

/// A configured admin email wins over whatever the source says; otherwise
/// only the selected source is consulted. Emails compare the way sign-up
/// stores them: trimmed and lowercased.
pub fn resolve_role(
    source: &RoleSource,
    admin_email: Option<&str>,
    email: &str,
    metadata_role: Option<&str>,
    profile_role: Option<&str>,
) -> Option<Role> {
    if admin_email
        .is_some_and(|admin_email| normalize_email(admin_email) == normalize_email(email))
    {
        return Some(Role::Admin);
    }

    match source {
        RoleSource::Metadata => metadata_role.and_then(Role::parse),
        RoleSource::Profile => profile_role.and_then(Role::parse),
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, account_id: &str) -> Result<Identity, Error>;
}

pub struct DatabaseResolver {
    pub pool: PgPool,
    pub source: RoleSource,
    pub admin_email: Option<String>,
}

#[async_trait]
impl IdentityResolver for DatabaseResolver {
    async fn resolve(&self, account_id: &str) -> Result<Identity, Error> {
        let account = account::find_by_id(&self.pool, account_id.to_string())
            .await
            .map_err(|_| Error::UnexpectedError)?
            .ok_or(Error::AccountNotFound)?;

        let profile_role = match self.source {
            RoleSource::Profile => {
                profile::repository::find_by_id(&self.pool, account.id.clone())
                    .await
                    .map_err(|_| Error::UnexpectedError)?
                    .and_then(|profile| profile.role)
            }
            RoleSource::Metadata => None,
        };

        let role = resolve_role(
            &self.source,
            self.admin_email.as_deref(),
            &account.email,
            account.metadata.role.as_deref(),
            profile_role.as_deref(),
        );

        let chef_id = match role {
            Some(Role::Chef) => chef::repository::find_by_account_id(&self.pool, account.id.clone())
                .await
                .map_err(|_| Error::UnexpectedError)?
                .map(|chef| chef.id),
            _ => None,
        };

        Ok(Identity {
            account_id: account.id,
            email: account.email,
            role,
            chef_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles_only() {
        assert_eq!(Role::parse("chef"), Some(Role::Chef));
        assert_eq!(Role::parse("foodie"), Some(Role::Foodie));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Chef"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn reads_the_configured_source() {
        let metadata = resolve_role(
            &RoleSource::Metadata,
            None,
            "a@b.co",
            Some("chef"),
            Some("foodie"),
        );
        let profile = resolve_role(
            &RoleSource::Profile,
            None,
            "a@b.co",
            Some("chef"),
            Some("foodie"),
        );

        assert_eq!(metadata, Some(Role::Chef));
        assert_eq!(profile, Some(Role::Foodie));
    }

    #[test]
    fn does_not_fall_back_to_the_other_source() {
        let role = resolve_role(&RoleSource::Profile, None, "a@b.co", Some("chef"), None);
        assert_eq!(role, None);
    }

    #[test]
    fn admin_email_overrides_any_stored_role() {
        let admin = Some("desk@qavaeat.com");

        assert_eq!(
            resolve_role(&RoleSource::Profile, admin, "desk@qavaeat.com", None, Some("foodie")),
            Some(Role::Admin)
        );
        assert_eq!(
            resolve_role(&RoleSource::Profile, admin, "chef@qavaeat.com", None, Some("foodie")),
            Some(Role::Foodie)
        );
    }

    #[test]
    fn mixed_case_admin_email_matches_the_stored_address() {
        let stored = normalize_email(" Desk@Qavaeat.com ");

        assert_eq!(stored, "desk@qavaeat.com");
        assert_eq!(
            resolve_role(
                &RoleSource::Profile,
                Some("Desk@Qavaeat.com"),
                &stored,
                None,
                Some("foodie")
            ),
            Some(Role::Admin)
        );
        assert_eq!(
            resolve_role(&RoleSource::Metadata, Some(" DESK@qavaeat.com\n"), &stored, None, None),
            Some(Role::Admin)
        );
    }

    #[test]
    fn unknown_role_strings_are_unresolvable() {
        let role = resolve_role(&RoleSource::Metadata, None, "a@b.co", Some("owner"), None);
        assert_eq!(role, None);
    }

    #[test]
    fn role_source_parsing() {
        assert_eq!("metadata".parse::<RoleSource>(), Ok(RoleSource::Metadata));
        assert_eq!(" Profile ".parse::<RoleSource>(), Ok(RoleSource::Profile));
        assert!("chefs".parse::<RoleSource>().is_err());
    }
}
