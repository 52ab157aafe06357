//! Convenient re-exports for downstream crates.

pub use crate::config::{SortConfig, SortConfigOverrides, WhitelistFile};
pub use crate::direction::{Direction, SortRequest};
pub use crate::directive::{OrderTerm, OrderingDirective};
pub use crate::error::{Error, Result};
pub use crate::field::{FieldSpec, FieldToken, Polarity, Whitelist};
pub use crate::record::{Attributes, Mapping, Record};
pub use crate::types::Scalar;
