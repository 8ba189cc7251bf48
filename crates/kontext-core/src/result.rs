//! Result type aliases for Kontext.

use crate::KontextError;

/// A specialized `Result` type for Kontext operations.
pub type KontextResult<T> = Result<T, KontextError>;
