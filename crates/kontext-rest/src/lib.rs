//! # Kontext REST
//!
//! REST API layer using Axum for Kontext. Maps the bounded context read
//! endpoint onto the process layer and translates domain errors into
//! structured HTTP error responses.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
