use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The collection is neither a query builder nor an in-memory sequence.
    #[error("An object of this type can not be sorted: {0}")]
    UnsortableCollection(String),

    #[error("record {index} can not be sorted by '{field}': {reason}")]
    UnsortableElement {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("invalid field token: '{0}'")]
    InvalidFieldToken(String),

    #[error("duplicate public field name: '{0}'")]
    DuplicateField(String),

    #[error("field spec '{0}' maps to no underlying fields")]
    EmptyFieldSpec(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Config(e.to_string())
    }
}
