use super::{app, get};
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::*;
use serde_json::json;

#[test]
fn home_page_has_lookup_form() {
    let resp = handle(get("/"), &app(StubSource::new())).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Find a property"));
    assert!(body.contains(r#"action="/property""#));
}

#[test]
fn detail_page_renders_view_model() {
    let stub = StubSource::new().with_record(PLOT_SELL_ID, plot_sell_payload());
    let resp = handle(get("/property/XXXRESSEPL0000001"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Corner plot near ring road"));
    assert!(body.contains("Pune, MH"));
    assert!(body.contains("2,500,000"));
    assert!(body.contains("Fixed"));
    assert!(body.contains("p2.jpg"));
    assert!(body.contains("Boundary wall"));
    assert!(body.contains("Plot-Sell"));
}

#[test]
fn query_form_reaches_the_same_page() {
    let stub = StubSource::new().with_record(AGRI_SALE_ID, agriculture_sale_payload());
    let resp = handle(get("/property?id=+XXXRESSEAG0000004+"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Mango orchard"));
}

#[test]
fn missing_id_is_a_bad_request() {
    for uri in ["/property", "/property?id=", "/property?id=%20%20"] {
        let result = handle(get(uri), &app(StubSource::new()));
        assert!(matches!(result, Err(ServerError::BadRequest(_))), "{uri}");
    }
}

#[test]
fn nested_path_is_rejected() {
    let result = handle(get("/property/a/b"), &app(StubSource::new()));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_id_shows_no_data() {
    let resp = handle(get("/property/XXXRESSEPL9999999"), &app(StubSource::new()))
        .expect("Handler failed");
    assert_eq!(resp.status(), 404);

    let body = read_body(resp);
    assert!(body.contains("No data found"));
    assert!(body.contains("XXXRESSEPL9999999"));
}

#[test]
fn empty_record_shows_no_data() {
    let stub = StubSource::new().with_record(PLOT_RENT_ID, json!({}));
    let resp = handle(get("/property/XXXCOMREPL0000002"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 404);
    assert!(read_body(resp).contains("No data found"));
}

#[test]
fn upstream_failure_maps_to_bad_gateway() {
    let stub = StubSource::new().with_failure(PLOT_LEASE_ID, "connection refused");
    let err = handle(get("/property/XXXCOMLEPL0000003"), &app(stub)).unwrap_err();
    assert!(matches!(err, ServerError::Upstream(_)));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 502);
    assert!(read_body(resp).contains("connection refused"));
}

#[test]
fn unknown_route_is_not_found() {
    let result = handle(get("/nowhere"), &app(StubSource::new()));
    assert!(matches!(result, Err(ServerError::NotFound)));

    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
}

#[test]
fn encoded_slash_in_path_id_is_rejected() {
    for uri in ["/property/a%2Fb", "/property/a%2fb", "/property/%FF"] {
        let result = handle(get(uri), &app(StubSource::new()));
        assert!(matches!(result, Err(ServerError::BadRequest(_))), "{uri}");
    }
}

#[test]
fn path_id_is_percent_decoded_before_fetch() {
    let stub = StubSource::new().with_record(PLOT_SELL_ID, plot_sell_payload());
    let resp = handle(get("/property/%20XXXRESSEPL0000001"), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Corner plot near ring road"));
}
