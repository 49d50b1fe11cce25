use super::{app, get};
use crate::errors::ServerError;
use crate::router::{handle, split_ids, MAX_ADMIN_IDS};
use crate::tests::utils::*;

#[test]
fn admin_page_without_ids_shows_form() {
    let resp = handle(get("/admin/properties"), &app(StubSource::new())).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Admin Properties"));
    assert!(body.contains("Enter one or more property IDs"));
}

#[test]
fn admin_page_lists_every_id_and_keeps_failures_inline() {
    let stub = StubSource::new()
        .with_record(PLOT_SELL_ID, plot_sell_payload())
        .with_record(AGRI_LEASE_ID, agriculture_lease_payload())
        .with_failure(PLOT_LEASE_ID, "upstream exploded");

    let uri = format!("/admin/properties?ids={PLOT_SELL_ID},{AGRI_LEASE_ID},{PLOT_LEASE_ID}");
    let resp = handle(get(&uri), &app(stub)).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Corner plot near ring road"));
    assert!(body.contains("Paddy field on lease"));
    assert!(body.contains("Agriculture-Lease"));
    assert!(body.contains("commercial/lease/plots"));
    assert!(body.contains("Could not load"));
    assert!(body.contains("upstream exploded"));
}

#[test]
fn admin_page_caps_id_count() {
    let ids: Vec<String> = (0..=MAX_ADMIN_IDS)
        .map(|n| format!("XXXRESSEPL{n:07}"))
        .collect();
    let uri = format!("/admin/properties?ids={}", ids.join(","));

    let result = handle(get(&uri), &app(StubSource::new()));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn split_ids_handles_separators_and_duplicates() {
    assert_eq!(
        split_ids(" A1, B2\nA1,,C3  "),
        vec!["A1".to_string(), "B2".to_string(), "C3".to_string()]
    );
    assert!(split_ids(" , ").is_empty());
}
