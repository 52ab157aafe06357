#![forbid(unsafe_code)]
//! sortable: sort a collection by a field name and direction taken from a
//! request, exposing only a whitelisted set of fields.
//!
//! ```
//! use serde_json::json;
//! use sortable::prelude::*;
//!
//! let resolver = FieldSortResolver::new(Some(vec![
//!     FieldSpec::try_from(("name", ["last", "++id"])).unwrap(),
//! ]))
//! .unwrap();
//!
//! assert_eq!(
//!     resolver.to_ordering_expression("name", "desc", None).as_deref(),
//!     Some("last DESC, id ASC")
//! );
//!
//! let records = vec![json!({"last": "b", "id": 1}), json!({"last": "a", "id": 2})];
//! let sorted = resolver
//!     .sorted(InMemory::from(records), "name", "asc")
//!     .unwrap()
//!     .into_records()
//!     .unwrap();
//! assert_eq!(sorted[0]["last"], "a");
//! ```

pub use sortable_core;
pub use sortable_resolver;
pub use sortable_web;

pub mod prelude {
    pub use sortable_core::prelude::*;
    pub use sortable_resolver::{
        FieldAccessor, FieldSortResolver, InMemory, Objects, OrderBy, OrderByClause, Resolution,
        SkipReason,
    };
    pub use sortable_web::{sortable_helper, SortLink, SortParams};
}
