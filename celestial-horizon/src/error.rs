use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid latitude {0}: must be a finite value within [-90, 90] degrees")]
    InvalidLatitude(f64),

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl Error {
    pub(crate) fn non_finite(what: &'static str, value: f64) -> Self {
        Self::NonFinite { what, value }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Rejects NaN and infinities, tagging the error with the parameter name.
pub(crate) fn require_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::non_finite(what, value))
    }
}
