//! Error types for the functional core
//!
//! Parsing and validation are the only fallible operations in this crate.
//! Pagination itself never fails: an inconsistent state yields an empty page list.

/// Error returned when a pagination configuration is rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Pagination field `{field}` must be >= 0, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("Pagination field `{field}` is too large: {value}")]
    TooLarge { field: &'static str, value: i64 },
}

/// Error returned when a user-supplied name cannot be mapped to a domain value
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sort field: {0}. Valid fields: id, base_experience, generation, height, name, species, weight")]
    UnknownSortField(String),

    #[error("Unknown generation: {0}. Expected 1-9 or generation-i .. generation-ix")]
    UnknownGeneration(String),
}
