//! # Kontext Core
//!
//! Core types, traits, and error definitions for Kontext.
//! This crate provides the foundational abstractions used across all layers
//! of the application: the unified error type, the typed record identifier,
//! and the generic repository contract.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
