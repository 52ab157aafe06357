//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use sortable::prelude::*;

/// Books as JSON objects, in insertion order.
pub fn book_rows() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Dune", "author": "Herbert", "year": 1965, "rating": 4.5}),
        json!({"id": 2, "title": "Emma", "author": "Austen", "year": 1815, "rating": 4.0}),
        json!({"id": 3, "title": "Ubik", "author": "Dick", "year": 1969, "rating": 4.0}),
        json!({"id": 4, "title": "Persuasion", "author": "Austen", "year": 1817, "rating": null}),
        json!({"id": 5, "title": "Solaris", "author": "Lem", "year": 1961, "rating": 4.5}),
    ]
}

pub fn ids(rows: &[Value]) -> Vec<i64> {
    rows.iter().map(|r| r["id"].as_i64().unwrap()).collect()
}

/// A struct-shaped record read through attribute access.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub year: i64,
}

impl Book {
    pub fn new(id: i64, title: &str, year: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
        }
    }
}

impl Attributes for Book {
    fn get_attr(&self, name: &str) -> Option<Scalar> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.as_str().into()),
            "year" => Some(self.year.into()),
            _ => None,
        }
    }
}

impl Record for Book {
    fn as_attributes(&self) -> Option<&dyn Attributes> {
        Some(self)
    }
}

/// A record type with no field access at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque(pub u8);

impl Record for Opaque {}

/// Query builder that remembers every ordering it was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingQuery {
    pub calls: Vec<Vec<String>>,
}

impl OrderBy for RecordingQuery {
    fn order_by(mut self, fields: &[String]) -> Self {
        self.calls.push(fields.to_vec());
        self
    }
}

pub fn book_whitelist() -> FieldSortResolver {
    FieldSortResolver::new(Some(vec![
        FieldSpec::plain("title").unwrap(),
        FieldSpec::try_from(("by", ["author", "++year"])).unwrap(),
        FieldSpec::try_from(("newest", "-year")).unwrap(),
        FieldSpec::try_from(("best", ["--rating", "title"])).unwrap(),
    ]))
    .unwrap()
}
