//! Centralized route authorization.
//!
//! Every protected route declares one [`Capability`] in the route table
//! (`router.rs`); [`authorize`] is the single evaluation point. Role-bearing
//! capabilities resolve the caller's role from the user directory using the
//! token's `email` claim; a role asserted inside the token itself is never
//! trusted.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::roles;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any valid bearer token.
    Authenticated,
    Admin,
    Instructor,
    Student,
}

impl Capability {
    /// Admins satisfy every capability; instructor/student gates admit only
    /// that role (or admin).
    pub fn allows(self, role: Option<&str>) -> bool {
        match self {
            Capability::Authenticated => true,
            Capability::Admin => role == Some(roles::ADMIN),
            Capability::Instructor => role == Some(roles::INSTRUCTOR) || role == Some(roles::ADMIN),
            Capability::Student => role == Some(roles::STUDENT) || role == Some(roles::ADMIN),
        }
    }
}

async fn authorize(
    state: AppState,
    req: Request,
    next: Next,
    capability: Capability,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if capability != Capability::Authenticated {
        let email = auth_user.email().ok_or_else(|| {
            AppError::forbidden(anyhow::anyhow!("token carries no email claim"))
        })?;

        let role = UserService::find_role(&state.db, email).await?;
        if !capability.allows(role.as_deref()) {
            return Err(AppError::forbidden(anyhow::anyhow!(
                "access denied: route requires {:?} capability",
                capability
            )));
        }
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

pub async fn require_auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match authorize(state, req, next, Capability::Authenticated).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match authorize(state, req, next, Capability::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_instructor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match authorize(state, req, next, Capability::Instructor).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match authorize(state, req, next, Capability::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_admits_any_role() {
        assert!(Capability::Authenticated.allows(None));
        assert!(Capability::Authenticated.allows(Some("student")));
        assert!(Capability::Authenticated.allows(Some("whatever")));
    }

    #[test]
    fn admin_gate_admits_only_admin() {
        assert!(Capability::Admin.allows(Some("admin")));
        assert!(!Capability::Admin.allows(Some("instructor")));
        assert!(!Capability::Admin.allows(Some("student")));
        assert!(!Capability::Admin.allows(None));
    }

    #[test]
    fn role_gates_admit_their_role_and_admin() {
        assert!(Capability::Instructor.allows(Some("instructor")));
        assert!(Capability::Instructor.allows(Some("admin")));
        assert!(!Capability::Instructor.allows(Some("student")));

        assert!(Capability::Student.allows(Some("student")));
        assert!(Capability::Student.allows(Some("admin")));
        assert!(!Capability::Student.allows(Some("instructor")));
    }

    #[test]
    fn unrecognized_roles_are_rejected_by_role_gates() {
        assert!(!Capability::Admin.allows(Some("Admin")));
        assert!(!Capability::Student.allows(Some("superuser")));
    }
}
