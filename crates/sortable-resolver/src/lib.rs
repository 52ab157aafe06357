#![forbid(unsafe_code)]
//! sortable-resolver: turn a requested (field, direction) pair into an
//! ordering and apply it to a collection.
//!
//! Design intent:
//! - Pure and synchronous; a resolver holds only its immutable whitelist and
//!   can be shared across threads for read-only calls.
//! - Unknown fields and invalid directions are not errors: the collection is
//!   handed back untouched.
//! - Query-builder collections get the ordering delegated through [`OrderBy`];
//!   in-memory sequences are sorted here with a stable multi-key comparator.

pub mod accessor;
pub mod objects;
pub mod query;
pub mod resolver;
pub mod sort;
pub mod traits;

pub use accessor::{select_accessor, AttributeAccessor, MappingAccessor};
pub use objects::{InMemory, NoQuery, Objects};
pub use query::OrderByClause;
pub use resolver::{FieldSortResolver, Resolution, SkipReason};
pub use traits::{FieldAccessor, OrderBy};
