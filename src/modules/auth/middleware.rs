use super::{
    gate::{self, Denial, Rejection},
    repository::session::Session,
    role::{self, Identity, Role},
    service,
};
use crate::types::Context;
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;

async fn current_session(parts: &mut Parts) -> Result<(Arc<Context>, Session), Denial> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| {
            tracing::error!("Context missing from request extensions: {}", err);
            Denial::LookupFailed
        })?;

    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| Denial::NoSession)?;

    let session = service::auth::verify_access_token(&ctx, bearer.token().to_string())
        .await
        .map_err(|err| match err {
            service::auth::Error::UnexpectedError => Denial::LookupFailed,
            _ => Denial::NoSession,
        })?;

    Ok((ctx, session))
}

async fn authenticate(
    parts: &mut Parts,
    required: Option<Role>,
) -> Result<(Session, Identity), Denial> {
    let (ctx, session) = current_session(parts).await?;

    let identity = ctx
        .observer
        .resolver()
        .resolve(&session.account_id)
        .await
        .map_err(|err| match err {
            role::Error::AccountNotFound => Denial::NoSession,
            role::Error::UnexpectedError => Denial::LookupFailed,
        })?;

    gate::authorize(required, identity.role)?;

    Ok((session, identity))
}

/// A live session whose role has not been checked. Only for endpoints that
/// must work before a role exists, such as signing out.
#[derive(Clone, Debug)]
pub struct CurrentSession {
    pub session: Session,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentSession {
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        current_session(parts)
            .await
            .map(|(_, session)| Self { session })
            .map_err(|denial| Rejection {
                denial,
                redirect: gate::LOGIN_REDIRECT,
            })
    }
}

macro_rules! define_gate {
    ($name:ident, $required:expr, $redirect:expr) => {
        #[derive(Clone, Debug)]
        pub struct $name {
            pub session: Session,
            pub identity: Identity,
        }

        #[async_trait]
        impl<S: Send + Sync> FromRequestParts<S> for $name {
            type Rejection = Rejection;

            async fn from_request_parts(
                parts: &mut Parts,
                _: &S,
            ) -> Result<Self, Self::Rejection> {
                authenticate(parts, $required)
                    .await
                    .map(|(session, identity)| Self { session, identity })
                    .map_err(|denial| {
                        tracing::debug!("Request denied by {}: {:?}", stringify!($name), denial);
                        Rejection {
                            denial,
                            redirect: $redirect,
                        }
                    })
            }
        }
    };
}

define_gate!(Auth, None, gate::LOGIN_REDIRECT);
define_gate!(ChefAuth, Some(Role::Chef), gate::LOGIN_REDIRECT);
define_gate!(FoodieAuth, Some(Role::Foodie), gate::LOGIN_REDIRECT);
define_gate!(AdminAuth, Some(Role::Admin), gate::HOME_REDIRECT);
