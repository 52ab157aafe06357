//! Mapping-style and attribute-style field accessors.

use sortable_core::record::Record;
use sortable_core::types::Scalar;

use crate::traits::FieldAccessor;

/// Reads fields by key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingAccessor;

/// Reads fields by attribute name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeAccessor;

static MAPPING: MappingAccessor = MappingAccessor;
static ATTRIBUTE: AttributeAccessor = AttributeAccessor;

impl FieldAccessor for MappingAccessor {
    fn name(&self) -> &'static str {
        "key"
    }

    fn supports(&self, record: &dyn Record) -> bool {
        record.as_mapping().is_some()
    }

    fn get(&self, record: &dyn Record, field: &str) -> Option<Scalar> {
        record.as_mapping()?.get_key(field)
    }
}

impl FieldAccessor for AttributeAccessor {
    fn name(&self) -> &'static str {
        "attribute"
    }

    fn supports(&self, record: &dyn Record) -> bool {
        record.as_attributes().is_some()
    }

    fn get(&self, record: &dyn Record, field: &str) -> Option<Scalar> {
        record.as_attributes()?.get_attr(field)
    }
}

/// Pick the accessor for a sequence whose first element is `first`.
///
/// Mapping-like records are read by key, anything else by attribute. Returns
/// `None` when `first` supports neither.
pub fn select_accessor(first: &dyn Record) -> Option<&'static dyn FieldAccessor> {
    if MAPPING.supports(first) {
        Some(&MAPPING)
    } else if ATTRIBUTE.supports(first) {
        Some(&ATTRIBUTE)
    } else {
        None
    }
}
