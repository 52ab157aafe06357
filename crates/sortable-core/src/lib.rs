#![forbid(unsafe_code)]
//! sortable-core: the value model shared by every sortable crate.
//!
//! This crate holds plain data only: requested directions, whitelisted field
//! specs with their polarity markers, the resolved `OrderingDirective`, and the
//! record access traits that in-memory sorting relies on. Nothing here sorts;
//! see `sortable-resolver` for that.

pub mod config;
pub mod direction;
pub mod directive;
pub mod error;
pub mod field;
pub mod prelude;
pub mod record;
pub mod types;

pub use config::{SortConfig, SortConfigOverrides, WhitelistFile};
pub use direction::{Direction, SortRequest};
pub use directive::{OrderTerm, OrderingDirective};
pub use error::{Error, Result};
pub use field::{FieldSpec, FieldToken, Polarity, Whitelist};
pub use record::{Attributes, Mapping, Record};
pub use types::Scalar;
