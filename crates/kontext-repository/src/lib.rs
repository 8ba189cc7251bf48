//! # Kontext Repository
//!
//! Data access layer for Kontext:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn BoundedContextRepository>   (domain interface)
//! MySqlBoundedContextRepository            (MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! The domain interface declares no operations of its own; the generic
//! [`Repository`](kontext_core::Repository) supertrait makes the inherited
//! CRUD contract explicit.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
