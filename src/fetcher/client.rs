// client.rs
use crate::config::RecordsConfig;
use crate::domain::Kind;
use crate::fetcher::FetchError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

/// Anything that can hand back the raw record for an identifier.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, kind: &Kind, identifier: &str) -> Result<Value, FetchError>;
}

/// Reads records from `<base_url>/<category>/<listing>/<subtype>/<identifier>`.
///
/// Axis values go in as decoded names, unknown ones as empty segments. One request
/// per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpRecordFetcher {
    client: Client,
    base_url: Url,
}

impl HttpRecordFetcher {
    pub fn new(config: &RecordsConfig) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_url(&self, kind: &Kind, identifier: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        append_segments(&mut url, kind, identifier)?;
        Ok(url)
    }
}

impl RecordSource for HttpRecordFetcher {
    fn fetch(&self, kind: &Kind, identifier: &str) -> Result<Value, FetchError> {
        let url = self.request_url(kind, identifier)?;
        let start = Instant::now();
        debug!(%url, "fetching record");

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), elapsed = ?start.elapsed(), "record fetch failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.json::<Value>().map_err(|e| {
            if e.is_decode() {
                FetchError::JsonParse(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        debug!(%url, elapsed = ?start.elapsed(), "record fetched");
        Ok(body)
    }
}

fn append_segments(url: &mut Url, kind: &Kind, identifier: &str) -> Result<(), FetchError> {
    let base = url.to_string();
    let mut segments = url
        .path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base))?;
    segments
        .pop_if_empty()
        .extend([kind.category, kind.listing, kind.subtype, identifier]);
    Ok(())
}

/// The path a record lives at, relative to the service root. Segments are percent-encoded,
/// so `pg/co-living` travels as a single segment.
pub fn request_path(kind: &Kind, identifier: &str) -> Result<String, FetchError> {
    let mut url =
        Url::parse("http://records.invalid/").map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    append_segments(&mut url, kind, identifier)?;
    Ok(url.path().to_string())
}
