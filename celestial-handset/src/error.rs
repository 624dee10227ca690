use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("registry holds {count} catalogs, at most {max} are supported")]
    TooManyCatalogs { count: usize, max: usize },

    #[error("unknown catalog type: {0}")]
    UnknownCatalogType(String),

    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    #[error(transparent)]
    Horizon(#[from] celestial_horizon::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
