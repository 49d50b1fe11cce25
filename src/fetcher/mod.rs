mod client;
mod fetch_error;

pub use client::{request_path, HttpRecordFetcher, RecordSource};
pub use fetch_error::FetchError;
