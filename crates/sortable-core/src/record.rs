//! Record access capabilities.
//!
//! An in-memory record exposes its fields either by key (mapping-like) or by
//! attribute name (struct-like). A record type reports which of the two it
//! supports through [`Record`]; the resolver inspects the first element of a
//! sequence once and then reads every element the same way.

use std::collections::{BTreeMap, HashMap};

use crate::types::Scalar;

/// Key-based field access (maps, JSON objects).
pub trait Mapping {
    /// Value stored under `key`, or `None` if the key is absent.
    fn get_key(&self, key: &str) -> Option<Scalar>;
}

/// Attribute-based field access (plain structs).
pub trait Attributes {
    /// Value of attribute `name`, or `None` if there is no such attribute.
    fn get_attr(&self, name: &str) -> Option<Scalar>;
}

/// Shape probe for in-memory records.
///
/// Both methods default to `None`: a type that overrides neither cannot be
/// sorted in memory.
pub trait Record {
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        None
    }

    fn as_attributes(&self) -> Option<&dyn Attributes> {
        None
    }
}

impl<V> Mapping for HashMap<String, V>
where
    V: Clone + Into<Scalar>,
{
    fn get_key(&self, key: &str) -> Option<Scalar> {
        self.get(key).cloned().map(Into::into)
    }
}

impl<V> Record for HashMap<String, V>
where
    V: Clone + Into<Scalar>,
{
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        Some(self)
    }
}

impl<V> Mapping for BTreeMap<String, V>
where
    V: Clone + Into<Scalar>,
{
    fn get_key(&self, key: &str) -> Option<Scalar> {
        self.get(key).cloned().map(Into::into)
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Into<Scalar>,
{
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        Some(self)
    }
}

impl Mapping for serde_json::Map<String, serde_json::Value> {
    fn get_key(&self, key: &str) -> Option<Scalar> {
        self.get(key).and_then(Scalar::from_json)
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        Some(self)
    }
}

/// Only JSON objects are mapping-like; every other JSON value has neither
/// keys nor attributes.
impl Record for serde_json::Value {
    fn as_mapping(&self) -> Option<&dyn Mapping> {
        self.as_object().map(|m| m as &dyn Mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Book {
        title: String,
        pages: i64,
    }

    impl Attributes for Book {
        fn get_attr(&self, name: &str) -> Option<Scalar> {
            match name {
                "title" => Some(self.title.clone().into()),
                "pages" => Some(self.pages.into()),
                _ => None,
            }
        }
    }

    impl Record for Book {
        fn as_attributes(&self) -> Option<&dyn Attributes> {
            Some(self)
        }
    }

    #[test]
    fn test_hashmap_is_mapping() {
        let mut m: HashMap<String, i64> = HashMap::new();
        m.insert("a".into(), 2);
        let mapping = m.as_mapping().unwrap();
        assert_eq!(mapping.get_key("a"), Some(Scalar::I64(2)));
        assert_eq!(mapping.get_key("b"), None);
        assert!(m.as_attributes().is_none());
    }

    #[test]
    fn test_json_value_shapes() {
        let obj = json!({"a": "x"});
        assert_eq!(
            obj.as_mapping().and_then(|m| m.get_key("a")),
            Some(Scalar::Str("x".into()))
        );
        assert!(json!(5).as_mapping().is_none());
        assert!(json!(5).as_attributes().is_none());
    }

    #[test]
    fn test_struct_is_attribute_record() {
        let b = Book {
            title: "Dune".into(),
            pages: 412,
        };
        assert!(b.as_mapping().is_none());
        let attrs = b.as_attributes().unwrap();
        assert_eq!(attrs.get_attr("pages"), Some(Scalar::I64(412)));
        assert_eq!(attrs.get_attr("title"), Some(Scalar::Str("Dune".into())));
    }
}
