//! Service implementations.

mod bounded_context_service_impl;

pub use bounded_context_service_impl::*;
