//! Request middleware.
//!
//! - [`auth`]: bearer-token extractor ([`auth::AuthUser`])
//! - [`policy`]: per-route capability checks, declared in `router.rs` and
//!   evaluated in one place
//!
//! Flow: the `Authorization: Bearer <token>` header is verified into claims;
//! for role-gated routes the caller's role is then loaded from the user
//! directory by the token's email claim before the handler runs.

pub mod auth;
pub mod policy;
