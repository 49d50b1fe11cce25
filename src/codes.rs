// src/codes.rs

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// The three independent classification dimensions packed into a listing identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Category,
    Listing,
    Subtype,
}

impl Axis {
    pub fn all() -> [Axis; 3] {
        [Axis::Category, Axis::Listing, Axis::Subtype]
    }

    /// Width of this axis' code inside an identifier.
    pub fn code_width(&self) -> usize {
        match self {
            Axis::Category => 3,
            Axis::Listing => 2,
            Axis::Subtype => 2,
        }
    }

    pub fn table(&self) -> &'static CodeTable {
        match self {
            Axis::Category => &CATEGORY,
            Axis::Listing => &LISTING,
            Axis::Subtype => &SUBTYPE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Category => write!(f, "category"),
            Axis::Listing => write!(f, "listing"),
            Axis::Subtype => write!(f, "subtype"),
        }
    }
}

pub const CATEGORY_ENTRIES: &[(&str, &str)] = &[
    ("residential", "RES"),
    ("commercial", "COM"),
    ("other", "OT"),
];

pub const LISTING_ENTRIES: &[(&str, &str)] = &[
    ("rent", "RE"),
    ("sell", "SE"),
    ("lease", "LE"),
    ("pg/co-living", "PG"),
];

pub const SUBTYPE_ENTRIES: &[(&str, &str)] = &[
    ("office-space", "OS"),
    ("co-working", "CW"),
    ("shop", "SH"),
    ("showroom", "SR"),
    ("warehouse", "WH"),
    ("industrial-building", "IB"),
    ("plots", "PL"),
    ("agriculture", "AG"),
    ("apartment", "AP"),
    ("independent-house", "IH"),
    ("villa", "VL"),
    ("builder-floor", "BF"),
    ("penthouse", "PH"),
    ("shared-space", "SS"),
];

static CATEGORY: Lazy<CodeTable> = Lazy::new(|| CodeTable::new(Axis::Category, CATEGORY_ENTRIES));
static LISTING: Lazy<CodeTable> = Lazy::new(|| CodeTable::new(Axis::Listing, LISTING_ENTRIES));
static SUBTYPE: Lazy<CodeTable> = Lazy::new(|| CodeTable::new(Axis::Subtype, SUBTYPE_ENTRIES));

/// Insertion-ordered name <-> code mapping for one axis.
///
/// Both directions are indexed once at construction. The reverse index keeps the
/// first name seen for a code, so a colliding code always decodes to the earliest entry.
#[derive(Debug)]
pub struct CodeTable {
    axis: Axis,
    entries: &'static [(&'static str, &'static str)],
    by_name: HashMap<&'static str, &'static str>,
    by_code: HashMap<&'static str, &'static str>,
}

impl CodeTable {
    pub fn new(axis: Axis, entries: &'static [(&'static str, &'static str)]) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());

        for &(name, code) in entries {
            by_name.entry(name).or_insert(code);
            by_code.entry(code).or_insert(name);
        }

        Self {
            axis,
            entries,
            by_name,
            by_code,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn encode(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup. Unknown codes yield the empty-string sentinel.
    pub fn decode(&self, code: &str) -> &'static str {
        self.by_code.get(code).copied().unwrap_or(UNKNOWN)
    }
}

/// Sentinel for an axis whose code matched no table entry.
pub const UNKNOWN: &str = "";

pub fn encode(axis: Axis, name: &str) -> Option<&'static str> {
    axis.table().encode(name)
}

pub fn decode(axis: Axis, code: &str) -> &'static str {
    axis.table().decode(code)
}
