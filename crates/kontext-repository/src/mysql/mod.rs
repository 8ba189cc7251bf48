//! MySQL repository implementations.

mod bounded_context_repository;

pub use bounded_context_repository::*;
