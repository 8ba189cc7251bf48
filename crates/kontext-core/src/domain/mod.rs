//! Domain entities.

mod bounded_context;

pub use bounded_context::*;
