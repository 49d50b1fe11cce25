// src/domain/normalize.rs

use crate::domain::images::{self, PhotoContainer};
use crate::domain::price::{negotiable_label, Price};
use crate::domain::probe;
use crate::domain::records::{
    Address, AgricultureLeaseRecord, AgricultureRecord, BasicInformation, LeaseTerms, Media,
    PlotLeaseRecord, PlotRentRecord, PlotSellRecord, SiteDetails, SiteFeatures,
};
use crate::domain::variant::{RecordVariant, Resolution, ResolvedRecord};
use serde::Serialize;

pub const NO_FEATURES: &str = "No notable features";

/// What the detail view and the admin list render. Built fresh per resolution cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub title: String,
    pub address_line: String,
    pub images: Vec<String>,
    pub primary_price: Price,
    pub price_label: String,
    pub features: Vec<String>,
}

impl ViewModel {
    /// Feature phrases, or a single placeholder line when there are none.
    pub fn feature_lines(&self) -> Vec<String> {
        if self.features.is_empty() {
            vec![NO_FEATURES.to_string()]
        } else {
            self.features.clone()
        }
    }
}

pub fn normalize(record: &ResolvedRecord) -> ViewModel {
    match &record.resolution {
        Resolution::Resolved(RecordVariant::Agriculture(r)) => agriculture(r),
        Resolution::Resolved(RecordVariant::AgricultureLease(r)) => agriculture_lease(r),
        Resolution::Resolved(RecordVariant::PlotRent(r)) => plot_rent(r),
        Resolution::Resolved(RecordVariant::PlotSell(r)) => plot_sell(r),
        Resolution::Resolved(RecordVariant::PlotLease(r)) => plot_lease(r),
        Resolution::Unresolved(raw) => probe::project(&record.kind, raw),
    }
}

fn agriculture(r: &AgricultureRecord) -> ViewModel {
    let price = r.price.as_ref();
    let rent = r.rent.as_ref();

    ViewModel {
        title: title_of(&r.basic_information, &r.land_details),
        address_line: address_of(&r.basic_information, &r.land_details, false),
        images: images_of(&r.media, &r.photos),
        primary_price: Price::first_of([
            price.and_then(|p| p.expected_price),
            rent.and_then(|p| p.expected_rent),
        ]),
        price_label: negotiable_label(
            price
                .and_then(|p| p.is_negotiable)
                .or_else(|| rent.and_then(|p| p.is_negotiable)),
        ),
        features: site_features(r.land_details.as_ref().map(|d| &d.features)),
    }
}

fn agriculture_lease(r: &AgricultureLeaseRecord) -> ViewModel {
    let (primary_price, price_label) = lease_price(r.lease_terms.as_ref());
    let mut features = site_features(r.land_details.as_ref().map(|d| &d.features));
    features.extend(lease_features(r.lease_terms.as_ref()));

    ViewModel {
        title: title_of(&r.basic_information, &r.land_details),
        address_line: address_of(&r.basic_information, &r.land_details, false),
        images: images_of(&r.media, &r.photos),
        primary_price,
        price_label,
        features,
    }
}

fn plot_rent(r: &PlotRentRecord) -> ViewModel {
    let details = r
        .rental_terms
        .as_ref()
        .and_then(|t| t.rent_details.as_ref());

    let mut features = site_features(r.property_details.as_ref().map(|d| &d.features));
    if let Some(deposit) = r
        .rental_terms
        .as_ref()
        .and_then(|t| non_blank(t.security_deposit.as_deref()))
    {
        features.push(format!("Security deposit: {deposit}"));
    }

    ViewModel {
        title: title_of(&r.basic_information, &r.property_details),
        address_line: address_of(&r.basic_information, &r.property_details, true),
        images: images_of(&r.media, &r.photos),
        primary_price: Price::first_of([details.and_then(|d| d.expected_rent)]),
        price_label: details
            .and_then(|d| d.rent_type.clone())
            .unwrap_or_default(),
        features,
    }
}

fn plot_sell(r: &PlotSellRecord) -> ViewModel {
    let pricing = r.pricing_details.as_ref();

    ViewModel {
        title: title_of(&r.basic_information, &r.plot_details),
        address_line: address_of(&r.basic_information, &r.plot_details, true),
        images: images_of(&r.media, &r.photos),
        primary_price: Price::first_of([
            pricing.and_then(|p| p.property_price),
            pricing.and_then(|p| p.total_price),
            pricing.and_then(|p| p.price_per_sq_ft),
        ]),
        price_label: pricing
            .and_then(|p| p.price_type.clone())
            .unwrap_or_default(),
        features: site_features(r.plot_details.as_ref().map(|d| &d.features)),
    }
}

fn plot_lease(r: &PlotLeaseRecord) -> ViewModel {
    let (primary_price, price_label) = lease_price(r.lease_terms.as_ref());
    let mut features = site_features(r.plot_details.as_ref().map(|d| &d.features));
    features.extend(lease_features(r.lease_terms.as_ref()));

    ViewModel {
        title: title_of(&r.basic_information, &r.plot_details),
        address_line: address_of(&r.basic_information, &r.plot_details, true),
        images: images_of(&r.media, &r.photos),
        primary_price,
        price_label,
        features,
    }
}

fn lease_price(terms: Option<&LeaseTerms>) -> (Price, String) {
    let amount = terms.and_then(|t| t.lease_amount.as_ref());
    (
        Price::first_of([amount.and_then(|a| a.amount)]),
        amount.and_then(|a| a.amount_type.clone()).unwrap_or_default(),
    )
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Top-level `basicInformation.title`, then the one nested in the details section.
fn title_of(basic: &Option<BasicInformation>, details: &Option<SiteDetails>) -> String {
    first_title([
        basic.as_ref(),
        details.as_ref().and_then(|d| d.basic_information.as_ref()),
    ])
}

pub(crate) fn first_title<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a BasicInformation>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|info| non_blank(info.title.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// Plot shapes keep the address in their details section first; agriculture in
/// `basicInformation` first.
fn address_of(
    basic: &Option<BasicInformation>,
    details: &Option<SiteDetails>,
    details_first: bool,
) -> String {
    let from_basic = basic.as_ref().and_then(|b| b.address.as_ref());
    let from_details = details.as_ref().and_then(|d| d.address.as_ref());

    let ordered = if details_first {
        [from_details, from_basic]
    } else {
        [from_basic, from_details]
    };
    first_address(ordered)
        .map(address_line)
        .unwrap_or_default()
}

pub(crate) fn first_address<'a, I>(candidates: I) -> Option<&'a Address>
where
    I: IntoIterator<Item = Option<&'a Address>>,
{
    candidates.into_iter().flatten().find(|address| {
        [
            &address.street,
            &address.city,
            &address.state,
            &address.zip_code,
        ]
        .iter()
        .any(|field| non_blank(field.as_deref()).is_some())
    })
}

/// `street, city, state, zipCode` with empty parts dropped.
pub fn address_line(address: &Address) -> String {
    let joined = [
        &address.street,
        &address.city,
        &address.state,
        &address.zip_code,
    ]
    .iter()
    .map(|field| field.as_deref().unwrap_or(""))
    .collect::<Vec<_>>()
    .join(", ");

    clean_address_line(&joined)
}

/// Strip the leading, trailing and doubled ", " runs that empty segments leave behind.
pub fn clean_address_line(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn images_of(media: &Option<Media>, legacy: &Option<PhotoContainer>) -> Vec<String> {
    let media = media.as_ref();
    images::flatten([
        media.and_then(|m| m.photos.as_ref()),
        media.and_then(|m| m.images.as_ref()),
        legacy.as_ref(),
    ])
}

pub fn site_features(features: Option<&SiteFeatures>) -> Vec<String> {
    let Some(f) = features else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if let Some(area) = non_blank(f.total_area.as_deref()) {
        match non_blank(f.area_unit.as_deref()) {
            Some(unit) => out.push(format!("Total area: {area} {unit}")),
            None => out.push(format!("Total area: {area}")),
        }
    }
    if f.boundary_wall.unwrap_or(false) {
        out.push("Boundary wall".to_string());
    }
    if f.water_and_sewer.unwrap_or(false) {
        out.push("Water & sewer available".to_string());
    }
    if let Some(road) = non_blank(f.road_access.as_deref()) {
        out.push(format!("Road access: {road}"));
    }
    if let Some(previous) = non_blank(f.previous_construction.as_deref()) {
        if !previous.eq_ignore_ascii_case("none") {
            out.push(format!("Previous construction: {previous}"));
        }
    }

    out
}

fn lease_features(terms: Option<&LeaseTerms>) -> Vec<String> {
    let Some(tenure) = terms.and_then(|t| t.lease_tenure.as_ref()) else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if let Some(duration) = non_blank(tenure.duration.as_deref()) {
        out.push(format!("Lease tenure: {duration}"));
    }
    if let Some(lock_in) = non_blank(tenure.lock_in_period.as_deref()) {
        out.push(format!("Lock-in period: {lock_in}"));
    }

    out
}
