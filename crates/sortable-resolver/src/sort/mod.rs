//! Applying a resolved ordering to a collection.

pub mod memory;

use sortable_core::directive::OrderingDirective;
use sortable_core::error::{Error, Result};
use sortable_core::record::Record;

use crate::objects::Objects;
use crate::traits::OrderBy;

pub use memory::{compare_keys, sort_records};

/// Apply `directive` to `objects`.
///
/// Query builders receive the directive as `field` / `-field` strings in key
/// order. In-memory records are sorted stably. Unsupported collections fail.
pub fn apply<Q, R>(objects: Objects<Q, R>, directive: &OrderingDirective) -> Result<Objects<Q, R>>
where
    Q: OrderBy,
    R: Record,
{
    match objects {
        Objects::Query(query) => {
            let fields = directive.order_by_fields();
            #[cfg(feature = "tracing")]
            tracing::debug!(fields = ?fields, "delegating ordering to query builder");
            Ok(Objects::Query(query.order_by(&fields)))
        }
        Objects::Records(records) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(rows = records.len(), keys = directive.len(), "sorting records in memory");
            sort_records(records, directive).map(Objects::Records)
        }
        Objects::Unsupported(kind) => Err(Error::UnsortableCollection(kind)),
    }
}
