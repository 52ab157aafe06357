//! Sort parameters extracted from a query string.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use sortable_core::config::SortConfig;
use sortable_core::direction::SortRequest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParams {
    /// Requested public field name; `None` when absent or empty.
    pub field: Option<String>,
    /// Raw direction token, not yet validated.
    pub direction: String,
}

impl SortParams {
    /// Parse a raw query string (without the leading `?`).
    ///
    /// When a parameter repeats, the last value wins. A missing direction
    /// falls back to the configured default.
    pub fn from_query(query: &str, config: &SortConfig) -> Self {
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()), config)
    }

    pub fn from_pairs<I, K, V>(pairs: I, config: &SortConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut field = None;
        let mut direction = None;
        for (k, v) in pairs {
            let (k, v) = (k.as_ref(), v.as_ref());
            if k == config.sort_param {
                field = Some(v.to_string());
            } else if k == config.dir_param {
                direction = Some(v.to_string());
            }
        }

        Self {
            field: field.filter(|f| !f.is_empty()),
            direction: direction.unwrap_or_else(|| config.default_direction.as_str().to_string()),
        }
    }

    /// The request to hand to a resolver, or `None` when no field was asked for.
    pub fn to_request(&self) -> Option<SortRequest> {
        self.field
            .as_ref()
            .map(|field| SortRequest::new(field.clone(), &self.direction))
    }
}
