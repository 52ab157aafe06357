//! The collections a resolver can sort, as an explicit tagged variant.

use serde_json::Value;

use crate::traits::OrderBy;

/// A collection handed to [`FieldSortResolver`](crate::FieldSortResolver).
///
/// The variant is checked once, at the top of `apply`: query builders get the
/// ordering delegated, in-memory records are sorted in place of the input, and
/// anything else fails with `UnsortableCollection`.
#[derive(Debug, Clone, PartialEq)]
pub enum Objects<Q, R> {
    /// A query builder; ordering is delegated through [`OrderBy`].
    Query(Q),
    /// A finite in-memory sequence of uniform records.
    Records(Vec<R>),
    /// A value with no supported access pattern; carries a description of it.
    Unsupported(String),
}

/// Placeholder query type for collections that are never query builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoQuery {}

impl OrderBy for NoQuery {
    fn order_by(self, _fields: &[String]) -> Self {
        match self {}
    }
}

/// In-memory-only collections.
pub type InMemory<R> = Objects<NoQuery, R>;

impl<Q, R> Objects<Q, R> {
    pub fn is_query(&self) -> bool {
        matches!(self, Objects::Query(_))
    }

    /// Number of records, when the collection is materialized in memory.
    pub fn len(&self) -> Option<usize> {
        match self {
            Objects::Records(records) => Some(records.len()),
            _ => None,
        }
    }

    pub fn into_query(self) -> Option<Q> {
        match self {
            Objects::Query(q) => Some(q),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<R>> {
        match self {
            Objects::Records(records) => Some(records),
            _ => None,
        }
    }
}

impl<R> From<Vec<R>> for InMemory<R> {
    fn from(records: Vec<R>) -> Self {
        Objects::Records(records)
    }
}

impl InMemory<Value> {
    /// A JSON array becomes an in-memory sequence; any other JSON value is
    /// unsupported.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => Objects::Records(items),
            Value::Null => Objects::Unsupported("JSON null".into()),
            Value::Bool(_) => Objects::Unsupported("JSON boolean".into()),
            Value::Number(_) => Objects::Unsupported("JSON number".into()),
            Value::String(_) => Objects::Unsupported("JSON string".into()),
            Value::Object(_) => Objects::Unsupported("JSON object".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_array() {
        let objects = InMemory::from_json(json!([{"a": 1}, {"a": 2}]));
        assert_eq!(objects.len(), Some(2));
        assert!(!objects.is_query());
    }

    #[test]
    fn test_from_json_scalar_is_unsupported() {
        let objects = InMemory::from_json(json!({"a": 1}));
        assert!(matches!(objects, Objects::Unsupported(ref kind) if kind == "JSON object"));
        assert_eq!(objects.len(), None);
    }
}
