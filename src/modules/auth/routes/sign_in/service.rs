use super::types::{request, response};
use crate::{
    modules::{
        auth::{
            landing::{self, Landing},
            observer::SessionEvent,
            repository::account,
            role::{self, Role},
            service,
        },
        chef,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let account = account::find_by_email(&ctx.db_conn.pool, role::normalize_email(&payload.email))
        .await
        .map_err(|_| response::Error::FailedToSignIn)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !service::password::verify(&account.password_hash, &payload.password) {
        return Err(response::Error::InvalidCredentials);
    }

    let session = service::auth::create_session(&ctx, account.id.clone())
        .await
        .map_err(|_| response::Error::FailedToSignIn)?;

    ctx.observer.publish(SessionEvent::SignedIn {
        session_id: session.id.clone(),
        account_id: account.id.clone(),
    });

    let identity = ctx
        .observer
        .resolver()
        .resolve(&account.id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to resolve identity on sign in: {:?}", err);
            response::Error::FailedToSignIn
        })?;

    let chef = match identity.role {
        Some(Role::Chef) => chef::repository::find_by_account_id(&ctx.db_conn.pool, account.id.clone())
            .await
            .map_err(|_| response::Error::FailedToSignIn)?,
        _ => None,
    };

    let landing = landing::landing(identity.role, chef.as_ref());
    let redirect = match landing.path() {
        Some(path) => path,
        None => {
            let session_id = session.id.clone();
            service::auth::end_session(&ctx, session)
                .await
                .map_err(|_| response::Error::FailedToSignIn)?;
            ctx.observer.publish(SessionEvent::SignedOut { session_id });

            tracing::info!("Turned away unapproved chef {}", account.id);
            return Err(match landing {
                Landing::AwaitingApproval => response::Error::AwaitingApproval,
                _ => response::Error::FailedToSignIn,
            });
        }
    };

    Ok(response::Success::SignedIn {
        access_token: session.access_token,
        expires_at: session.expires_at,
        role: identity.role,
        redirect,
    })
}
