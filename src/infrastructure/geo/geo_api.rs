use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::population::{LookupError, PopulationLookup};
use crate::domain::value_objects::geo_code::GeoCode;

pub const DEFAULT_BASE_URL: &str = "https://geo.api.gouv.fr";

/// Population lookup against the French geographic API.
///
/// A department figure is the sum over every commune of the department,
/// fetched in one listing call.
pub struct GeoApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl GeoApiClient {
    /// Creates a client for `base_url` with a whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Transport` if the HTTP client cannot be
    /// initialized (e.g. TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, code: &GeoCode) -> String {
        let base = &self.base_url;
        let c = code.as_str();
        match code {
            GeoCode::Commune(_) => format!("{base}/communes/{c}?fields=population"),
            GeoCode::Department(_) => format!("{base}/departements/{c}/communes?fields=population"),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Value, LookupError> {
        tracing::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LookupError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl PopulationLookup for GeoApiClient {
    async fn population(&self, code: i64) -> Result<u64, LookupError> {
        let geo = GeoCode::classify(code).ok_or(LookupError::InvalidCode(code))?;
        tracing::debug!("Looking up population of {geo}");
        let body = self.fetch(&self.url_for(&geo)).await?;
        match geo {
            GeoCode::Commune(_) => commune_population(&body),
            GeoCode::Department(_) => department_population(&body),
        }
    }
}

/// Population field of a single commune object.
///
/// # Errors
///
/// Returns `LookupError::NoData` if the body is not an object with a
/// numeric `population`.
pub fn commune_population(body: &Value) -> Result<u64, LookupError> {
    body.as_object()
        .and_then(|commune| commune.get("population"))
        .and_then(Value::as_u64)
        .ok_or(LookupError::NoData)
}

/// Sum of the `population` fields of a commune listing; a commune without
/// a figure counts as zero.
///
/// # Errors
///
/// Returns `LookupError::NoData` if the body is not a non-empty array.
pub fn department_population(body: &Value) -> Result<u64, LookupError> {
    let communes = body
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or(LookupError::NoData)?;

    Ok(communes
        .iter()
        .map(|c| c.get("population").and_then(Value::as_u64).unwrap_or(0))
        .sum())
}
