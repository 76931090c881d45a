use super::types::{request, response};
use crate::{
    modules::auth::{observer::SessionEvent, service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let session_id = payload.session.id.clone();

    service::auth::end_session(&ctx, payload.session)
        .await
        .map_err(|_| response::Error::FailedToSignOut)?;

    ctx.observer.publish(SessionEvent::SignedOut { session_id });

    Ok(response::Success::SignedOut)
}
