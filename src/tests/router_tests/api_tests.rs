use super::{app, get};
use crate::router::handle;
use crate::tests::utils::*;
use serde_json::Value;

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&read_body(resp)).expect("body should be JSON")
}

#[test]
fn api_returns_outcome_json() {
    let stub = StubSource::new().with_record(PLOT_RENT_ID, plot_rent_payload());
    let resp = handle(get("/api/property/XXXCOMREPL0000002"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let body = json_body(resp);
    assert_eq!(body["identifier"], PLOT_RENT_ID);
    assert_eq!(body["variant"], "Plot-Rent");
    assert_eq!(body["kind"]["category"], "commercial");
    assert_eq!(body["view"]["primaryPrice"], 45000);
    assert_eq!(body["view"]["priceLabel"], "Monthly");
    assert_eq!(body["view"]["title"], "Fenced yard for parking");
}

#[test]
fn api_reports_missing_records_as_404() {
    let resp = handle(get("/api/property/XXXRESSEPL9999999"), &app(StubSource::new()))
        .expect("Handler failed");
    assert_eq!(resp.status(), 404);

    let body = json_body(resp);
    assert_eq!(body["identifier"], "XXXRESSEPL9999999");
    assert_eq!(body["error"], "No data found");
}

#[test]
fn api_reports_upstream_failures_as_502() {
    let stub = StubSource::new().with_failure(AGRI_LEASE_ID, "dns failure");
    let resp = handle(get("/api/property/XXXCOMLEAG0000005"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 502);

    let body = json_body(resp);
    assert!(body["error"].as_str().unwrap().contains("dns failure"));
}

#[test]
fn api_decodes_path_id() {
    let stub = StubSource::new().with_record(PLOT_SELL_ID, plot_sell_payload());
    let resp = handle(get("/api/property/XXXRESSEPL%300000001"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(json_body(resp)["identifier"], PLOT_SELL_ID);
}
