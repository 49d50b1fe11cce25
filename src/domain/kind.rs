// src/domain/kind.rs

use crate::codes::{self, Axis, UNKNOWN};
use serde::Serialize;
use std::fmt;

// Fixed character offsets of each axis code inside an identifier.
pub const CATEGORY_SPAN: (usize, usize) = (3, 6);
pub const LISTING_SPAN: (usize, usize) = (6, 8);
pub const SUBTYPE_SPAN: (usize, usize) = (8, 10);

pub const AGRICULTURE: &str = "agriculture";
pub const PLOTS: &str = "plots";

/// Decoded (category, listing, subtype) triple of a listing identifier.
///
/// Any axis may hold the empty-string sentinel when its code was not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Kind {
    pub category: &'static str,
    pub listing: &'static str,
    pub subtype: &'static str,
}

/// The raw code slices an identifier carried, kept for logging misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSlices {
    pub category: String,
    pub listing: String,
    pub subtype: String,
}

impl Kind {
    pub fn new(category: &'static str, listing: &'static str, subtype: &'static str) -> Self {
        Self {
            category,
            listing,
            subtype,
        }
    }

    pub fn axis(&self, axis: Axis) -> &'static str {
        match axis {
            Axis::Category => self.category,
            Axis::Listing => self.listing,
            Axis::Subtype => self.subtype,
        }
    }

    /// Axes that decoded to the unknown sentinel.
    pub fn unknown_axes(&self) -> Vec<Axis> {
        Axis::all()
            .into_iter()
            .filter(|axis| self.axis(*axis) == UNKNOWN)
            .collect()
    }

    pub fn is_fully_known(&self) -> bool {
        self.unknown_axes().is_empty()
    }

    /// Agriculture lives in the subtype table; a category spelled that way is honoured too.
    pub fn is_agriculture(&self) -> bool {
        self.subtype == AGRICULTURE || self.category == AGRICULTURE
    }

    pub fn is_plots(&self) -> bool {
        self.subtype == PLOTS
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(v: &str) -> &str {
            if v.is_empty() {
                "?"
            } else {
                v
            }
        }
        write!(
            f,
            "{}/{}/{}",
            show(self.category),
            show(self.listing),
            show(self.subtype)
        )
    }
}

/// Characters `[start, end)` of `identifier`; empty when the identifier is too short.
fn slice_chars(identifier: &str, (start, end): (usize, usize)) -> String {
    let len = identifier.chars().count();
    if end > len {
        return String::new();
    }
    identifier.chars().skip(start).take(end - start).collect()
}

pub fn code_slices(identifier: &str) -> CodeSlices {
    CodeSlices {
        category: slice_chars(identifier, CATEGORY_SPAN),
        listing: slice_chars(identifier, LISTING_SPAN),
        subtype: slice_chars(identifier, SUBTYPE_SPAN),
    }
}

/// Decode an identifier into its [`Kind`]. Never fails; unmatched axes become unknown.
pub fn decode(identifier: &str) -> Kind {
    let slices = code_slices(identifier);
    Kind {
        category: codes::decode(Axis::Category, &slices.category),
        listing: codes::decode(Axis::Listing, &slices.listing),
        subtype: codes::decode(Axis::Subtype, &slices.subtype),
    }
}

/// Build an identifier from a three-character prefix, the axis names and a serial.
///
/// Names missing from their table are written as `?` runs of the axis width, which
/// decode back to the unknown sentinel.
pub fn encode_identifier(
    prefix: &str,
    category: &str,
    listing: &str,
    subtype: &str,
    serial: &str,
) -> String {
    let mut id: String = prefix.chars().chain(std::iter::repeat('0')).take(3).collect();

    for (axis, name) in [
        (Axis::Category, category),
        (Axis::Listing, listing),
        (Axis::Subtype, subtype),
    ] {
        match codes::encode(axis, name) {
            Some(code) => id.push_str(code),
            None => id.extend(std::iter::repeat('?').take(axis.code_width())),
        }
    }

    id.push_str(serial);
    id
}
