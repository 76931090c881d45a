use super::role::Role;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const LOGIN_REDIRECT: &str = "/login";
pub const HOME_REDIRECT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NoSession,
    LookupFailed,
    RoleUnresolved,
    RoleMismatch,
}

/// An unresolvable role is denied even when the endpoint requires no role.
pub fn authorize(required: Option<Role>, resolved: Option<Role>) -> Result<(), Denial> {
    let resolved = resolved.ok_or(Denial::RoleUnresolved)?;

    match required {
        None => Ok(()),
        Some(required) if required == resolved => Ok(()),
        Some(_) => Err(Denial::RoleMismatch),
    }
}

#[derive(Debug)]
pub struct Rejection {
    pub denial: Denial,
    pub redirect: &'static str,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.denial {
            Denial::NoSession => (StatusCode::UNAUTHORIZED, "Invalid session token"),
            Denial::LookupFailed => (StatusCode::UNAUTHORIZED, "Failed to verify session"),
            Denial::RoleUnresolved => (StatusCode::FORBIDDEN, "No role found for this account"),
            Denial::RoleMismatch => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (
            status,
            Json(json!({ "error": message, "redirect": self.redirect })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 3] = [Role::Chef, Role::Foodie, Role::Admin];

    #[test]
    fn unresolved_roles_are_always_denied() {
        assert_eq!(authorize(None, None), Err(Denial::RoleUnresolved));
        for required in ROLES {
            assert_eq!(authorize(Some(required), None), Err(Denial::RoleUnresolved));
        }
    }

    #[test]
    fn any_role_passes_a_plain_session_gate() {
        for role in ROLES {
            assert_eq!(authorize(None, Some(role)), Ok(()));
        }
    }

    #[test]
    fn only_the_required_role_passes() {
        for required in ROLES {
            for role in ROLES {
                let decision = authorize(Some(required), Some(role));
                if required == role {
                    assert_eq!(decision, Ok(()));
                } else {
                    assert_eq!(decision, Err(Denial::RoleMismatch));
                }
            }
        }
    }

    #[tokio::test]
    async fn rejections_carry_status_and_redirect() {
        let response = Rejection {
            denial: Denial::RoleMismatch,
            redirect: HOME_REDIRECT,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["redirect"], "/");
        assert_eq!(body["error"], "Forbidden");

        let response = Rejection {
            denial: Denial::LookupFailed,
            redirect: LOGIN_REDIRECT,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
