//! # Kontext Service
//!
//! Business logic service layer for Kontext. Translates store records into
//! business-facing response objects; a missing record is signaled as a
//! not-found failure, distinguishable from a successful fetch.

pub mod bounded_context_service;
pub mod dto;
pub mod r#impl;

pub use bounded_context_service::*;
pub use dto::*;
pub use r#impl::*;
