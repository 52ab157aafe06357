//! Sorting configuration that adapters can serialize/deserialize.
//!
//! The core never reads the CSS class names; they travel with the config so
//! the link-building adapter can pick them up from one place.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::Result;
use crate::field::FieldSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Query parameter carrying the public field name.
    pub sort_param: String,

    /// Query parameter carrying the direction token.
    pub dir_param: String,

    /// Direction assumed when the request has no direction parameter.
    pub default_direction: Direction,

    /// CSS class for a column currently sorted ascending.
    pub asc_class: String,

    /// CSS class for a column currently sorted descending.
    pub desc_class: String,

    /// CSS class for a column that is not the current sort column.
    pub none_class: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            sort_param: "sort".to_string(),
            dir_param: "dir".to_string(),
            default_direction: Direction::Asc,
            asc_class: "sort-asc".to_string(),
            desc_class: "sort-desc".to_string(),
            none_class: "sort-none".to_string(),
        }
    }
}

impl SortConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SORTABLE_SORT_PARAM`: name of the field query parameter
    /// - `SORTABLE_DIR_PARAM`: name of the direction query parameter
    /// - `SORTABLE_DEFAULT_DIRECTION`: `asc` or `desc`
    /// - `SORTABLE_ASC_CLASS`, `SORTABLE_DESC_CLASS`, `SORTABLE_NONE_CLASS`: CSS classes
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SortConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("SORTABLE_SORT_PARAM") {
            cfg.sort_param = v;
        }

        if let Some(v) = non_empty("SORTABLE_DIR_PARAM") {
            cfg.dir_param = v;
        }

        if let Some(dir) = non_empty("SORTABLE_DEFAULT_DIRECTION")
            .as_deref()
            .and_then(Direction::parse)
        {
            cfg.default_direction = dir;
        }

        if let Some(v) = non_empty("SORTABLE_ASC_CLASS") {
            cfg.asc_class = v;
        }

        if let Some(v) = non_empty("SORTABLE_DESC_CLASS") {
            cfg.desc_class = v;
        }

        if let Some(v) = non_empty("SORTABLE_NONE_CLASS") {
            cfg.none_class = v;
        }

        cfg
    }

    pub fn from_yaml_str(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    /// CSS class for a column sorted in `direction`.
    pub fn class_for(&self, direction: Direction) -> &str {
        match direction {
            Direction::Asc => &self.asc_class,
            Direction::Desc => &self.desc_class,
        }
    }
}

/// Partial [`SortConfig`]: only the keys that are set replace the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfigOverrides {
    pub sort_param: Option<String>,
    pub dir_param: Option<String>,
    pub default_direction: Option<Direction>,
    pub asc_class: Option<String>,
    pub desc_class: Option<String>,
    pub none_class: Option<String>,
}

impl SortConfig {
    /// Overlay the keys set in `overrides`, keeping everything else.
    pub fn apply_overrides(&mut self, overrides: &SortConfigOverrides) {
        if let Some(v) = &overrides.sort_param {
            self.sort_param = v.clone();
        }
        if let Some(v) = &overrides.dir_param {
            self.dir_param = v.clone();
        }
        if let Some(dir) = overrides.default_direction {
            self.default_direction = dir;
        }
        if let Some(v) = &overrides.asc_class {
            self.asc_class = v.clone();
        }
        if let Some(v) = &overrides.desc_class {
            self.desc_class = v.clone();
        }
        if let Some(v) = &overrides.none_class {
            self.none_class = v.clone();
        }
    }
}

/// On-disk whitelist: the sortable fields plus optional config overrides.
///
/// ```yaml
/// config:
///   desc_class: down
/// fields:
///   - title
///   - [date, ["-published", "++id"]]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitelistFile {
    pub config: Option<SortConfigOverrides>,
    pub fields: Option<Vec<FieldSpec>>,
}

impl WhitelistFile {
    pub fn from_yaml_str(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }
}
