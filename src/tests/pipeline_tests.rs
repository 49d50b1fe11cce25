use super::utils::*;
use crate::domain::Price;
use crate::fetcher::FetchError;
use crate::pipeline::{resolve_listing, PipelineError};
use serde_json::{json, Value};

#[test]
fn resolves_plot_sale_end_to_end() {
    let stub = StubSource::new().with_record(PLOT_SELL_ID, plot_sell_payload());

    let outcome = resolve_listing(&stub, PLOT_SELL_ID).unwrap();

    assert_eq!(
        stub.requested(),
        vec!["/residential/sell/plots/XXXRESSEPL0000001"]
    );
    assert_eq!(outcome.identifier, PLOT_SELL_ID);
    assert_eq!(outcome.kind.to_string(), "residential/sell/plots");
    assert_eq!(outcome.variant, "Plot-Sell");
    assert_eq!(outcome.view.primary_price, Price::Amount(2_500_000.0));
    assert_eq!(outcome.view.price_label, "Fixed");
    assert_eq!(outcome.view.images, vec!["p1.jpg", "p2.jpg"]);
}

#[test]
fn empty_payloads_are_no_data() {
    for payload in [Value::Null, json!({})] {
        let stub = StubSource::new().with_record(PLOT_RENT_ID, payload.clone());
        match resolve_listing(&stub, PLOT_RENT_ID) {
            Err(PipelineError::NoData { identifier }) => assert_eq!(identifier, PLOT_RENT_ID),
            other => panic!("{payload}: expected no data, got {other:?}"),
        }
    }
}

#[test]
fn fetch_errors_pass_through() {
    let stub = StubSource::new().with_failure(PLOT_LEASE_ID, "timed out");
    let err = resolve_listing(&stub, PLOT_LEASE_ID).unwrap_err();
    assert!(matches!(err, PipelineError::Fetch(FetchError::Network(_))));
    assert!(err.to_string().contains("timed out"));

    let missing = resolve_listing(&StubSource::new(), PLOT_LEASE_ID).unwrap_err();
    match missing {
        PipelineError::Fetch(e) => assert!(e.is_not_found()),
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn unknown_kind_still_fetches_and_projects() {
    let stub = StubSource::new().with_record(
        UNKNOWN_LISTING_ID,
        json!({
            "basicInformation": { "title": "Mystery plot" },
            "media": { "images": ["m.jpg"] }
        }),
    );

    let outcome = resolve_listing(&stub, UNKNOWN_LISTING_ID).unwrap();

    assert_eq!(
        stub.requested(),
        vec!["/residential//plots/XXXRESZZPL0000006"]
    );
    assert_eq!(outcome.variant, "Unresolved");
    assert_eq!(outcome.view.title, "Mystery plot");
    assert_eq!(outcome.view.images, vec!["m.jpg"]);
    assert_eq!(outcome.view.primary_price, Price::NotAvailable);
}

#[test]
fn short_identifier_decodes_to_unknown_kind() {
    let stub = StubSource::new().with_record("RES", json!({ "basicInformation": { "title": "x" } }));

    let outcome = resolve_listing(&stub, "RES").unwrap();
    assert!(!outcome.kind.is_fully_known());
    assert_eq!(stub.requested(), vec!["////RES"]);
}

#[test]
fn outcome_serializes_for_the_api() {
    let stub = StubSource::new().with_record(AGRI_LEASE_ID, agriculture_lease_payload());
    let outcome = resolve_listing(&stub, AGRI_LEASE_ID).unwrap();

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["identifier"], AGRI_LEASE_ID);
    assert_eq!(value["variant"], "Agriculture-Lease");
    assert_eq!(value["kind"]["subtype"], "agriculture");
    assert_eq!(value["view"]["primaryPrice"], 50000);
}
