//! Link state for a sortable column header.
//!
//! Given the current request and the column a header belongs to, work out
//! where the header should link to and which CSS class it should carry.
//! Clicking the currently sorted column flips its direction; clicking any
//! other column sorts it ascending.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use sortable_core::config::SortConfig;
use sortable_core::direction::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortLink {
    /// `<path>?sort=<column>&...&dir=<direction>`
    pub url: String,
    /// One of the configured asc/desc/none classes.
    pub css_class: String,
    /// Direction the link requests.
    pub direction: Direction,
    /// Whether `column` is the one the current request sorts by.
    pub active: bool,
}

impl SortLink {
    /// Build the link for `column` from the current `path` and raw `query`.
    ///
    /// Other query parameters are preserved in their original order; the
    /// sort and direction parameters are rewritten.
    pub fn build(path: &str, query: &str, column: &str, config: &SortConfig) -> SortLink {
        let mut current_field = None;
        let mut current_dir = None;
        let mut rest = Vec::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            if k == config.sort_param.as_str() {
                current_field = Some(v.into_owned());
            } else if k == config.dir_param.as_str() {
                current_dir = Some(v.into_owned());
            } else {
                rest.push((k.into_owned(), v.into_owned()));
            }
        }

        let current_dir = current_dir
            .as_deref()
            .and_then(Direction::parse)
            .unwrap_or(Direction::Asc);
        let active = current_field.as_deref() == Some(column);

        let (direction, css_class) = if active {
            (current_dir.inverse(), config.class_for(current_dir).to_string())
        } else {
            (Direction::Asc, config.none_class.clone())
        };

        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair(&config.sort_param, column);
        ser.extend_pairs(rest.iter());
        ser.append_pair(&config.dir_param, direction.as_str());

        SortLink {
            url: format!("{}?{}", path, ser.finish()),
            css_class,
            direction,
            active,
        }
    }
}
