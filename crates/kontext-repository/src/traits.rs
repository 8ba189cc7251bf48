//! Repository trait definitions.

use kontext_core::{BoundedContext, ContextId, Repository};

/// Bounded context repository trait.
///
/// Declares no operations of its own; the full CRUD contract
/// (`find_by_id`, `find_all`, `save`, `update`, `delete_by_id`, `exists`,
/// `count`) comes from the generic [`Repository`] supertrait. No custom
/// queries are defined for this entity.
pub trait BoundedContextRepository: Repository<BoundedContext, ContextId> {}
