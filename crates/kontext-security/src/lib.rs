//! # Kontext Security
//!
//! The authentication-context collaborator: resolves a bearer token into
//! the authenticated caller's principal. No authorization decisions are
//! made here or anywhere else in the application.

pub mod jwt;
pub mod principal;

pub use jwt::*;
pub use principal::*;
