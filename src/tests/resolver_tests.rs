use crate::domain::kind::{decode, Kind};
use crate::domain::variant::{resolve, RecordVariant, Resolution, VariantShape};
use crate::tests::utils::*;
use serde_json::json;

#[test]
fn dispatch_table() {
    let cases = [
        (Kind::new("residential", "sell", "agriculture"), Some(VariantShape::Agriculture)),
        (Kind::new("commercial", "rent", "agriculture"), Some(VariantShape::Agriculture)),
        (Kind::new("commercial", "lease", "agriculture"), Some(VariantShape::AgricultureLease)),
        (Kind::new("residential", "rent", "plots"), Some(VariantShape::PlotRent)),
        (Kind::new("commercial", "sell", "plots"), Some(VariantShape::PlotSell)),
        (Kind::new("", "lease", "plots"), Some(VariantShape::PlotLease)),
        (Kind::new("residential", "pg/co-living", "plots"), None),
        (Kind::new("residential", "sell", "apartment"), None),
        (Kind::new("residential", "", "plots"), None),
        (Kind::new("", "", ""), None),
    ];

    for (kind, expected) in cases {
        assert_eq!(VariantShape::for_kind(&kind), expected, "{kind}");
    }
}

#[test]
fn resolves_each_shape_from_its_payload() {
    let cases = [
        (PLOT_SELL_ID, plot_sell_payload(), VariantShape::PlotSell),
        (PLOT_RENT_ID, plot_rent_payload(), VariantShape::PlotRent),
        (PLOT_LEASE_ID, plot_lease_payload(), VariantShape::PlotLease),
        (AGRI_SALE_ID, agriculture_sale_payload(), VariantShape::Agriculture),
        (AGRI_LEASE_ID, agriculture_lease_payload(), VariantShape::AgricultureLease),
    ];

    for (id, payload, shape) in cases {
        let record = resolve(decode(id), payload);
        match &record.resolution {
            Resolution::Resolved(variant) => assert_eq!(variant.shape(), shape, "{id}"),
            Resolution::Unresolved(_) => panic!("{id} did not resolve"),
        }
        assert_eq!(record.variant_name(), shape.name());
    }
}

#[test]
fn typed_fields_are_read_leniently() {
    let record = resolve(decode(PLOT_RENT_ID), plot_rent_payload());
    let Resolution::Resolved(RecordVariant::PlotRent(rent)) = record.resolution else {
        panic!("expected plot rent");
    };

    let details = rent.rental_terms.unwrap().rent_details.unwrap();
    assert_eq!(details.expected_rent, Some(45000.0));
    assert_eq!(details.rent_type.as_deref(), Some("Monthly"));

    let property = rent.property_details.unwrap();
    assert_eq!(property.address.unwrap().zip_code.as_deref(), Some("422010"));
    assert_eq!(property.features.water_and_sewer, Some(true));
}

#[test]
fn missing_required_key_is_unresolved() {
    let payload = json!({
        "basicInformation": { "title": "Plot without pricing" },
        "plotDetails": { "boundaryWall": true }
    });
    let record = resolve(decode(PLOT_SELL_ID), payload.clone());

    assert!(!record.is_resolved());
    assert_eq!(record.resolution, Resolution::Unresolved(payload));
    assert_eq!(record.variant_name(), "Unresolved");
}

#[test]
fn kinds_without_a_shape_keep_the_raw_payload() {
    let payload = plot_sell_payload();
    let record = resolve(decode(UNKNOWN_LISTING_ID), payload.clone());
    assert_eq!(record.resolution, Resolution::Unresolved(payload));

    let record = resolve(decode("XXXRESPGSS0000009"), json!({ "basicInformation": {} }));
    assert!(!record.is_resolved());
}

#[test]
fn non_object_payloads_are_unresolved() {
    for payload in [json!([1, 2, 3]), json!("text"), json!(17)] {
        let record = resolve(decode(PLOT_SELL_ID), payload);
        assert!(!record.is_resolved());
    }
}

#[test]
fn wrongly_typed_sections_degrade_to_absent() {
    let payload = json!({
        "basicInformation": "not an object",
        "pricingDetails": { "propertyPrice": { "nested": true }, "totalPrice": "9,99,000" },
        "media": ["not", "media"]
    });
    let record = resolve(decode(PLOT_SELL_ID), payload);
    let Resolution::Resolved(RecordVariant::PlotSell(sell)) = record.resolution else {
        panic!("expected plot sell");
    };

    assert_eq!(sell.basic_information, None);
    assert_eq!(sell.media, None);
    let pricing = sell.pricing_details.unwrap();
    assert_eq!(pricing.property_price, None);
    assert_eq!(pricing.total_price, Some(999000.0));
}
