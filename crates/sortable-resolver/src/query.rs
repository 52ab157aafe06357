//! Minimal query-builder that records an ordering and renders it as SQL.
//!
//! Nothing here executes a query; it only carries the `field` / `-field`
//! list a real query layer would receive.

use crate::traits::OrderBy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderByClause {
    fields: Vec<String>,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// `ORDER BY name DESC, id ASC`, or `None` when no ordering was applied.
    pub fn to_sql(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }
        let cols = self
            .fields
            .iter()
            .map(|f| match f.strip_prefix('-') {
                Some(name) => format!("{} DESC", name),
                None => format!("{} ASC", f),
            })
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("ORDER BY {}", cols))
    }
}

impl OrderBy for OrderByClause {
    fn order_by(self, fields: &[String]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }
}
