//! # Kontext Clients
//!
//! HTTP implementations of the remote collaborator contracts declared by
//! the process layer: reference data lookup and fire-and-forget messaging.

pub mod messaging;
pub mod reference_data;

pub use messaging::*;
pub use reference_data::*;
