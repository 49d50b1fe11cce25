use astra::Server;
use listing_resolver::config::load_config;
use listing_resolver::fetcher::HttpRecordFetcher;
use listing_resolver::responses::error_to_response;
use listing_resolver::{handle, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    // RUST_LOG, when set, wins over the configured filter.
    let (config, config_source) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            init_logging("info");
            tracing::error!("Configuration failed: {e}");
            std::process::exit(1);
        }
    };
    init_logging(&config.logging.filter);
    tracing::info!("Using configuration: {config_source}");

    let fetcher = match HttpRecordFetcher::new(&config.records) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Record fetcher init failed: {e}");
            std::process::exit(1);
        }
    };
    let app = AppState::new(Arc::new(fetcher));

    let addr = match config.server.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        records = %config.records.base_url,
        "Starting server at http://{addr}"
    );

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%method, %path, status = err.status(), "{err}");
                error_to_response(err)
            }
        }
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
