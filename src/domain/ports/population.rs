use async_trait::async_trait;
use thiserror::Error;

/// Why a population lookup produced no figure.
///
/// Every variant renders as a sentence fit to show the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid code {0}: expected a 5-digit commune or a 2-3 digit department")]
    InvalidCode(i64),
    #[error("no population data available for this code")]
    NoData,
    #[error("error {0}: unable to retrieve the data")]
    HttpStatus(u16),
    #[error("malformed response from the population service: {0}")]
    MalformedPayload(String),
    #[error("population service unreachable: {0}")]
    Transport(String),
}

#[async_trait]
pub trait PopulationLookup: Send + Sync {
    /// Population of a commune, or the summed population of a department.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` for an unclassifiable code, a non-success
    /// response, a payload without usable figures, or a transport failure.
    async fn population(&self, code: i64) -> Result<u64, LookupError>;
}
