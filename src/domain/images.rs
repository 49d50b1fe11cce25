// src/domain/images.rs

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Where a record keeps its photo URLs: a flat list, or named buckets
/// (`exterior`, `interior`, `documents`, `plot`, ...) each holding a list.
#[derive(Debug, Clone, PartialEq)]
pub enum PhotoContainer {
    List(Vec<Value>),
    Buckets(Map<String, Value>),
}

impl PhotoContainer {
    /// Anything other than an array or an object is not a photo container.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(PhotoContainer::List(items.clone())),
            Value::Object(buckets) => Some(PhotoContainer::Buckets(buckets.clone())),
            _ => None,
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            PhotoContainer::List(items) => collect_list(items, out),
            // Buckets are walked in document order (serde_json preserve_order).
            PhotoContainer::Buckets(buckets) => {
                for bucket in buckets.values() {
                    match bucket {
                        Value::Array(items) => collect_list(items, out),
                        Value::String(url) => out.push(url),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn collect_list<'a>(items: &'a [Value], out: &mut Vec<&'a str>) {
    for item in items {
        if let Value::String(url) = item {
            out.push(url);
        }
    }
}

/// Flatten photo sources, in priority order, into one list of URLs.
///
/// Absent sources are skipped, empty strings dropped, and duplicates removed
/// keeping the first occurrence.
pub fn flatten<'a, I>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a PhotoContainer>>,
{
    let mut urls = Vec::new();
    for source in sources.into_iter().flatten() {
        source.collect_into(&mut urls);
    }

    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}
