// src/pipeline.rs

use crate::domain::kind::{self, Kind};
use crate::domain::{normalize, resolve, ViewModel};
use crate::fetcher::{FetchError, RecordSource};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Could not load record: {0}")]
    Fetch(#[from] FetchError),
    #[error("No data found for {identifier}")]
    NoData { identifier: String },
}

/// Everything one resolution cycle produced for an identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingOutcome {
    pub identifier: String,
    pub kind: Kind,
    pub variant: &'static str,
    pub view: ViewModel,
}

fn is_empty_payload(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Decode, fetch, resolve and normalize one identifier.
///
/// Only a failed fetch or an empty payload stops the cycle; unknown codes and
/// unmatched shapes degrade to defaults.
pub fn resolve_listing(
    source: &dyn RecordSource,
    identifier: &str,
) -> Result<ListingOutcome, PipelineError> {
    let kind = kind::decode(identifier);

    if !kind.is_fully_known() {
        let slices = kind::code_slices(identifier);
        warn!(
            identifier,
            unknown = ?kind.unknown_axes(),
            category_code = %slices.category,
            listing_code = %slices.listing,
            subtype_code = %slices.subtype,
            "unresolved kind; fetching with empty segments"
        );
    } else {
        debug!(identifier, %kind, "decoded identifier");
    }

    let raw = source.fetch(&kind, identifier).map_err(|e| {
        warn!(identifier, error = %e, "record fetch failed");
        e
    })?;

    if is_empty_payload(&raw) {
        info!(identifier, "record service returned no data");
        return Err(PipelineError::NoData {
            identifier: identifier.to_string(),
        });
    }

    let record = resolve(kind, raw);
    let view = normalize(&record);

    info!(
        identifier,
        %kind,
        variant = record.variant_name(),
        images = view.images.len(),
        "listing resolved"
    );

    Ok(ListingOutcome {
        identifier: identifier.to_string(),
        kind,
        variant: record.variant_name(),
        view,
    })
}
