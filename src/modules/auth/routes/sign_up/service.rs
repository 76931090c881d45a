use super::types::{request, response};
use crate::{
    modules::{
        auth::{
            repository::account,
            role::{self, Role},
            service::password,
        },
        profile,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

/// Anything other than a chef sign-up lands as a foodie.
fn requested_role(raw: &str) -> Role {
    match Role::parse(raw) {
        Some(Role::Chef) => Role::Chef,
        _ => Role::Foodie,
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let role = requested_role(&payload.role);
    let email = role::normalize_email(&payload.body.email);
    let full_name = payload.body.full_name.trim().to_string();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if account::find_by_email(&mut *tx, email.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        password::hash(&payload.body.password).map_err(|_| response::Error::SignupFailed)?;

    let account = account::create(
        &mut *tx,
        account::CreateAccountPayload {
            email: email.clone(),
            password_hash,
            metadata: account::AccountMetadata {
                full_name: full_name.clone(),
                role: Some(role.to_string()),
            },
        },
    )
    .await
    .map_err(|_| response::Error::SignupFailed)?;

    profile::repository::create(
        &mut *tx,
        profile::repository::CreateProfilePayload {
            id: account.id.clone(),
            email,
            full_name,
            role: Some(role.to_string()),
        },
    )
    .await
    .map_err(|_| response::Error::SignupFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!("Account {} signed up as {}", account.id, role);

    Ok(response::Success::AccountCreated {
        id: account.id,
        role: role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_chef_sign_ups_keep_their_role() {
        assert_eq!(requested_role("chef"), Role::Chef);
        assert_eq!(requested_role("foodie"), Role::Foodie);
        assert_eq!(requested_role("admin"), Role::Foodie);
        assert_eq!(requested_role("anything"), Role::Foodie);
    }
}
