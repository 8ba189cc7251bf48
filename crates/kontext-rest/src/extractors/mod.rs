//! Custom Axum extractors.

mod principal;

pub use principal::*;
