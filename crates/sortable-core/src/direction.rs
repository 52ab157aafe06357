//! Requested sort direction and the (field, direction) request pair.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction token. Only the exact strings `asc` and `desc` are
    /// accepted; anything else is an invalid direction.
    pub fn parse(token: &str) -> Option<Direction> {
        match token {
            "asc" => Some(Direction::Asc),
            "desc" => Some(Direction::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    /// Upper-case keyword used in ordering expressions.
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort request as received from the caller.
///
/// `direction` is `None` when the raw token was neither `asc` nor `desc`;
/// such a request is a no-op rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub field: String,
    pub direction: Option<Direction>,
}

impl SortRequest {
    pub fn new(field: impl Into<String>, direction: &str) -> Self {
        Self {
            field: field.into(),
            direction: Direction::parse(direction),
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(Direction::Asc),
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(Direction::Desc),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.direction.is_some()
    }
}
