mod admin_tests;
mod api_tests;
mod property_tests;

use crate::router::AppState;
use crate::tests::utils::StubSource;
use astra::{Body, Request};
use std::sync::Arc;

fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn app(stub: StubSource) -> AppState {
    AppState::new(Arc::new(stub))
}
