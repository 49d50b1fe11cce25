// src/domain/variant.rs

use crate::domain::kind::Kind;
use crate::domain::records::{
    AgricultureLeaseRecord, AgricultureRecord, PlotLeaseRecord, PlotRentRecord, PlotSellRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// The record shapes the platform serves. Exactly one applies to a resolved kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VariantShape {
    Agriculture,
    AgricultureLease,
    PlotRent,
    PlotSell,
    PlotLease,
}

impl VariantShape {
    /// Dispatch on the decoded kind. Combinations nobody serves yield `None`.
    pub fn for_kind(kind: &Kind) -> Option<VariantShape> {
        match (kind.is_agriculture(), kind.listing, kind.is_plots()) {
            (true, "sell" | "rent", _) => Some(VariantShape::Agriculture),
            (true, "lease", _) => Some(VariantShape::AgricultureLease),
            (false, "rent", true) => Some(VariantShape::PlotRent),
            (false, "sell", true) => Some(VariantShape::PlotSell),
            (false, "lease", true) => Some(VariantShape::PlotLease),
            _ => None,
        }
    }

    /// Top-level key a payload must carry to be read as this shape.
    pub fn required_key(&self) -> &'static str {
        match self {
            VariantShape::Agriculture => "Agriculturelanddetails",
            VariantShape::AgricultureLease => "leaseTerms",
            VariantShape::PlotRent => "rentalTerms",
            VariantShape::PlotSell => "pricingDetails",
            VariantShape::PlotLease => "leaseTerms",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VariantShape::Agriculture => "Agriculture-Sale/Rent",
            VariantShape::AgricultureLease => "Agriculture-Lease",
            VariantShape::PlotRent => "Plot-Rent",
            VariantShape::PlotSell => "Plot-Sell",
            VariantShape::PlotLease => "Plot-Lease",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordVariant {
    Agriculture(AgricultureRecord),
    AgricultureLease(AgricultureLeaseRecord),
    PlotRent(PlotRentRecord),
    PlotSell(PlotSellRecord),
    PlotLease(PlotLeaseRecord),
}

impl RecordVariant {
    pub fn shape(&self) -> VariantShape {
        match self {
            RecordVariant::Agriculture(_) => VariantShape::Agriculture,
            RecordVariant::AgricultureLease(_) => VariantShape::AgricultureLease,
            RecordVariant::PlotRent(_) => VariantShape::PlotRent,
            RecordVariant::PlotSell(_) => VariantShape::PlotSell,
            RecordVariant::PlotLease(_) => VariantShape::PlotLease,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(RecordVariant),
    /// No shape applies; the raw payload is kept for best-effort extraction.
    Unresolved(Value),
}

/// A fetched payload paired with the kind it was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    pub kind: Kind,
    pub resolution: Resolution,
}

impl ResolvedRecord {
    pub fn variant_name(&self) -> &'static str {
        match &self.resolution {
            Resolution::Resolved(variant) => variant.shape().name(),
            Resolution::Unresolved(_) => "Unresolved",
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }
}

fn parse<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    serde_json::from_value(raw.clone()).ok()
}

/// Interpret `raw` as the record shape `kind` calls for.
///
/// A kind with no shape, a payload missing the shape's key, or one that will not
/// parse all come back as [`Resolution::Unresolved`] rather than an error.
pub fn resolve(kind: Kind, raw: Value) -> ResolvedRecord {
    let Some(shape) = VariantShape::for_kind(&kind) else {
        warn!(%kind, "no record shape for kind; falling back to best-effort extraction");
        return ResolvedRecord {
            kind,
            resolution: Resolution::Unresolved(raw),
        };
    };

    if raw.get(shape.required_key()).is_none() {
        warn!(
            %kind,
            shape = shape.name(),
            key = shape.required_key(),
            "payload is missing the key its shape requires"
        );
        return ResolvedRecord {
            kind,
            resolution: Resolution::Unresolved(raw),
        };
    }

    let variant = match shape {
        VariantShape::Agriculture => parse(&raw).map(RecordVariant::Agriculture),
        VariantShape::AgricultureLease => parse(&raw).map(RecordVariant::AgricultureLease),
        VariantShape::PlotRent => parse(&raw).map(RecordVariant::PlotRent),
        VariantShape::PlotSell => parse(&raw).map(RecordVariant::PlotSell),
        VariantShape::PlotLease => parse(&raw).map(RecordVariant::PlotLease),
    };

    match variant {
        Some(variant) => {
            debug!(%kind, shape = shape.name(), "resolved record shape");
            ResolvedRecord {
                kind,
                resolution: Resolution::Resolved(variant),
            }
        }
        None => {
            warn!(%kind, shape = shape.name(), "payload did not parse as its shape");
            ResolvedRecord {
                kind,
                resolution: Resolution::Unresolved(raw),
            }
        }
    }
}
