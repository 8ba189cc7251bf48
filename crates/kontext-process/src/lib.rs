//! # Kontext Process
//!
//! Request-scoped orchestration between the transport and the domain
//! service. The process layer receives the authenticated caller's
//! principal, logs request-level concerns, and delegates to the domain
//! service. External collaborators (reference data, messaging) are injected
//! as interface-typed constructor parameters so tests can substitute
//! in-memory fakes.

pub mod bounded_context_process;
pub mod messaging;
pub mod reference_data;

pub use bounded_context_process::*;
pub use messaging::*;
pub use reference_data::*;
