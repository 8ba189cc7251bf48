//! REST API controllers.

pub mod bounded_context_controller;
pub mod health_controller;

pub use health_controller::*;
