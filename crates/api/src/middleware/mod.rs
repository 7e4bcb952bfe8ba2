//! Request gates for protected routes.
//!
//! - [`auth::require_auth`] -- Bearer-token gate layered onto `/api/admin`.
//! - [`auth::AuthUser`] -- The authenticated subject, extracted by handlers.

pub mod auth;
