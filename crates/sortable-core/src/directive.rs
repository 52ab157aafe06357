//! Resolved ordering: underlying fields paired with their effective direction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::field::FieldToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTerm {
    pub field: String,
    pub direction: Direction,
}

impl OrderTerm {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Query-layer form: `field` for ascending, `-field` for descending.
    pub fn to_order_by(&self) -> String {
        match self.direction {
            Direction::Asc => self.field.clone(),
            Direction::Desc => format!("-{}", self.field),
        }
    }
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction.keyword())
    }
}

/// Ordered sort keys; earlier terms are the primary keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingDirective {
    pub terms: Vec<OrderTerm>,
}

impl OrderingDirective {
    pub fn new(terms: Vec<OrderTerm>) -> Self {
        Self { terms }
    }

    /// Resolve each token's polarity marker against the requested direction.
    pub fn from_tokens(tokens: &[FieldToken], requested: Direction) -> Self {
        Self {
            terms: tokens
                .iter()
                .map(|t| OrderTerm::new(t.field.clone(), t.resolve(requested)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderTerm> {
        self.terms.iter()
    }

    /// Strings handed to a query layer's "order by" capability, in key order.
    pub fn order_by_fields(&self) -> Vec<String> {
        self.terms.iter().map(OrderTerm::to_order_by).collect()
    }

    /// `"name DESC, id ASC"`
    pub fn to_expression(&self) -> String {
        self.terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a OrderingDirective {
    type Item = &'a OrderTerm;
    type IntoIter = std::slice::Iter<'a, OrderTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
