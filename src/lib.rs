pub mod codes;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetcher;
pub mod pipeline;
pub mod responses;
pub mod router;
pub mod session;
pub mod templates;

pub use pipeline::{resolve_listing, ListingOutcome, PipelineError};
pub use router::{handle, AppState};

#[cfg(test)]
mod tests;
