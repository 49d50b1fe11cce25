// src/domain/probe.rs
//
// Projection of payloads no record shape claimed. Every lookup goes through a JSON
// pointer and falls back to a default, so any payload yields a view model.

use crate::domain::images::{self, PhotoContainer};
use crate::domain::kind::Kind;
use crate::domain::lenient::{value_to_amount, value_to_flag, value_to_string};
use crate::domain::normalize::{address_line, first_address, first_title, site_features, ViewModel};
use crate::domain::price::{negotiable_label, Price, PriceRule};
use crate::domain::records::{Address, BasicInformation, SiteFeatures};
use serde::de::DeserializeOwned;
use serde_json::Value;

const TITLE_SECTIONS: &[&str] = &[
    "/basicInformation",
    "/propertyDetails/basicInformation",
    "/plotDetails/basicInformation",
    "/Agriculturelanddetails/basicInformation",
];

const ADDRESS_POINTERS: &[&str] = &[
    "/basicInformation/address",
    "/propertyDetails/address",
    "/plotDetails/address",
    "/Agriculturelanddetails/address",
];

const PHOTO_POINTERS: &[&str] = &["/media/photos", "/media/images", "/photos"];

const FEATURE_SECTIONS: &[&str] = &["/Agriculturelanddetails", "/propertyDetails", "/plotDetails"];

fn section<T: DeserializeOwned>(raw: &Value, pointer: &str) -> Option<T> {
    match raw.pointer(pointer) {
        Some(v @ Value::Object(_)) => serde_json::from_value(v.clone()).ok(),
        _ => None,
    }
}

pub fn project(kind: &Kind, raw: &Value) -> ViewModel {
    let titles: Vec<BasicInformation> = TITLE_SECTIONS
        .iter()
        .filter_map(|pointer| section(raw, pointer))
        .collect();

    let addresses: Vec<Address> = ADDRESS_POINTERS
        .iter()
        .filter_map(|pointer| section(raw, pointer))
        .collect();

    let photos: Vec<PhotoContainer> = PHOTO_POINTERS
        .iter()
        .filter_map(|pointer| raw.pointer(pointer))
        .filter_map(PhotoContainer::from_value)
        .collect();

    let features: Option<SiteFeatures> = FEATURE_SECTIONS
        .iter()
        .find_map(|pointer| section(raw, pointer));

    let (primary_price, price_label) = price(kind, raw);

    ViewModel {
        title: first_title(titles.iter().map(Some)),
        address_line: first_address(addresses.iter().map(Some))
            .map(address_line)
            .unwrap_or_default(),
        images: images::flatten(photos.iter().map(Some)),
        primary_price,
        price_label,
        features: site_features(features.as_ref()),
    }
}

/// Apply the kind's price rule directly to the raw payload.
pub fn price(kind: &Kind, raw: &Value) -> (Price, String) {
    let Some(rule) = PriceRule::for_kind(kind) else {
        return (Price::NotAvailable, String::new());
    };

    let primary = Price::first_of(
        rule.amount_pointers()
            .iter()
            .map(|pointer| raw.pointer(pointer).and_then(value_to_amount)),
    );

    let label = match rule {
        PriceRule::AgricultureSaleOrRent => negotiable_label(
            rule.label_pointers()
                .iter()
                .find_map(|pointer| raw.pointer(pointer).and_then(value_to_flag)),
        ),
        _ => rule
            .label_pointers()
            .iter()
            .find_map(|pointer| raw.pointer(pointer).and_then(value_to_string))
            .unwrap_or_default(),
    };

    (primary, label)
}
