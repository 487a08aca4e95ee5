#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Pagination(#[from] pokedex_core::error::ConfigError),

    #[error("Data file not found: {0}")]
    DataFileNotFound(String),
}
