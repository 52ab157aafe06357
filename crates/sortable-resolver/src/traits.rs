//! Capability traits at the seams between the resolver and its callers.

use sortable_core::record::Record;
use sortable_core::types::Scalar;

/// A query-builder-like collection that can take an ordering.
///
/// `fields` are in key order, each either `field` (ascending) or `-field`
/// (descending). Implementations replace any previous ordering.
pub trait OrderBy: Sized {
    fn order_by(self, fields: &[String]) -> Self;
}

/// Reads one named field out of an in-memory record.
///
/// One accessor is chosen per sequence (from the shape of its first element)
/// and applied to every element.
pub trait FieldAccessor: Send + Sync {
    /// Human-readable access pattern name (stable).
    fn name(&self) -> &'static str;

    /// Whether `record` offers this access pattern at all.
    fn supports(&self, record: &dyn Record) -> bool;

    /// Value of `field`, or `None` if the record lacks the pattern or the field.
    fn get(&self, record: &dyn Record, field: &str) -> Option<Scalar>;
}
