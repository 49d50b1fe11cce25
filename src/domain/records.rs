// src/domain/records.rs

use crate::domain::images::PhotoContainer;
use crate::domain::lenient;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// record
//  ├── basicInformation
//  │    ├── title
//  │    └── address
//  │         ├── street
//  │         ├── city
//  │         ├── state
//  │         └── zipCode
//  ├── Agriculturelanddetails | propertyDetails | plotDetails
//  │    ├── basicInformation?
//  │    ├── address?
//  │    └── boundaryWall, waterAndSewer, roadAccess, previousConstruction, totalArea, areaUnit
//  ├── price | rent | rentalTerms | pricingDetails | leaseTerms
//  ├── media
//  │    ├── photos   (list or buckets)
//  │    └── images   (list or buckets)
//  └── photos        (legacy)

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInformation {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "lenient::string")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub state: Option<String>,
    #[serde(default, alias = "pincode", deserialize_with = "lenient::string")]
    pub zip_code: Option<String>,
}

/// Physical traits of a site that turn into feature phrases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFeatures {
    #[serde(default, alias = "totalPlotArea", deserialize_with = "lenient::string")]
    pub total_area: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub area_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub boundary_wall: Option<bool>,
    #[serde(default, alias = "waterSewer", deserialize_with = "lenient::flag")]
    pub water_and_sewer: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub road_access: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub previous_construction: Option<String>,
}

/// `Agriculturelanddetails`, `propertyDetails` and `plotDetails` share this shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDetails {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub features: SiteFeatures,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub images: Option<PhotoContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePrice {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub expected_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_negotiable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentAsk {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub expected_rent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_negotiable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalTerms {
    #[serde(default, deserialize_with = "lenient::section")]
    pub rent_details: Option<RentDetails>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub security_deposit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDetails {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub expected_rent: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub rent_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDetails {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub property_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_price: Option<f64>,
    #[serde(default, rename = "pricePerSqFt", deserialize_with = "lenient::amount")]
    pub price_per_sq_ft: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub price_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTerms {
    #[serde(default, deserialize_with = "lenient::section")]
    pub lease_amount: Option<LeaseAmount>,
    #[serde(default, deserialize_with = "tenure")]
    pub lease_tenure: Option<LeaseTenure>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseAmount {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub amount_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseTenure {
    #[serde(default, alias = "tenure", alias = "minimumTenure", deserialize_with = "lenient::string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub lock_in_period: Option<String>,
}

// `leaseTenure` is sometimes a bare "5 years" instead of an object.
fn tenure<'de, D>(deserializer: D) -> Result<Option<LeaseTenure>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        Some(other) => lenient::value_to_string(&other).map(|duration| LeaseTenure {
            duration: Some(duration),
            lock_in_period: None,
        }),
        None => None,
    })
}

/// Agriculture land offered for sale or rent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgricultureRecord {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, rename = "Agriculturelanddetails", deserialize_with = "lenient::section")]
    pub land_details: Option<SiteDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub price: Option<SalePrice>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub rent: Option<RentAsk>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgricultureLeaseRecord {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, rename = "Agriculturelanddetails", deserialize_with = "lenient::section")]
    pub land_details: Option<SiteDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub lease_terms: Option<LeaseTerms>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotRentRecord {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub property_details: Option<SiteDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub rental_terms: Option<RentalTerms>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSellRecord {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub plot_details: Option<SiteDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub pricing_details: Option<PricingDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLeaseRecord {
    #[serde(default, deserialize_with = "lenient::section")]
    pub basic_information: Option<BasicInformation>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub plot_details: Option<SiteDetails>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub lease_terms: Option<LeaseTerms>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub media: Option<Media>,
    #[serde(default, deserialize_with = "lenient::photos")]
    pub photos: Option<PhotoContainer>,
}
