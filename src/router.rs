use crate::domain::kind;
use crate::errors::ServerError;
use crate::fetcher::RecordSource;
use crate::pipeline::{resolve_listing, ListingOutcome, PipelineError};
use crate::responses::{html_response, html_response_with_status, json_response, ResultResp};
use crate::templates::pages::{self, AdminRow};
use astra::Request;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub const MAX_ADMIN_IDS: usize = 50;

/// Shared handles every request needs.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn RecordSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/property") => {
            let params = parse_query(&req);
            let id = params
                .get("id")
                .map(|id| id.trim())
                .filter(|id| !id.is_empty())
                .ok_or_else(|| ServerError::BadRequest("Missing property id".into()))?;
            property_detail(app, id)
        }
        ("GET", "/admin/properties") => {
            let params = parse_query(&req);
            admin_properties(app, params.get("ids").map(String::as_str).unwrap_or(""))
        }
        ("GET", p) if p.starts_with("/api/property/") => {
            let id = decode_segment(&p["/api/property/".len()..])?;
            property_json(app, &id)
        }
        ("GET", p) if p.starts_with("/property/") => {
            let id = decode_segment(&p["/property/".len()..])?;
            property_detail(app, &id)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Path tails arrive percent-encoded; ids are checked and fetched in decoded form.
fn decode_segment(raw: &str) -> Result<String, ServerError> {
    urlencoding::decode(raw)
        .map(|id| id.into_owned())
        .map_err(|_| ServerError::BadRequest(format!("Invalid property id: {raw:?}")))
}

fn check_identifier(identifier: &str) -> Result<&str, ServerError> {
    let identifier = identifier.trim();
    if identifier.is_empty() || identifier.contains('/') {
        return Err(ServerError::BadRequest(format!(
            "Invalid property id: {identifier:?}"
        )));
    }
    Ok(identifier)
}

fn property_detail(app: &AppState, identifier: &str) -> ResultResp {
    let identifier = check_identifier(identifier)?;

    match resolve_listing(app.source(), identifier) {
        Ok(outcome) => html_response(pages::property_page(&outcome)),
        Err(PipelineError::NoData { identifier }) => {
            html_response_with_status(404, pages::no_data_page(&identifier))
        }
        Err(PipelineError::Fetch(e)) if e.is_not_found() => {
            html_response_with_status(404, pages::no_data_page(identifier))
        }
        Err(PipelineError::Fetch(e)) => Err(ServerError::Upstream(e.to_string())),
    }
}

fn property_json(app: &AppState, identifier: &str) -> ResultResp {
    let identifier = check_identifier(identifier)?;

    match resolve_listing(app.source(), identifier) {
        Ok(outcome) => json_response(200, &outcome),
        Err(PipelineError::NoData { identifier }) => json_response(
            404,
            &json!({ "identifier": identifier, "error": "No data found" }),
        ),
        Err(PipelineError::Fetch(e)) if e.is_not_found() => json_response(
            404,
            &json!({ "identifier": identifier, "error": "No data found" }),
        ),
        Err(PipelineError::Fetch(e)) => json_response(
            502,
            &json!({ "identifier": identifier, "error": e.to_string() }),
        ),
    }
}

fn admin_properties(app: &AppState, ids: &str) -> ResultResp {
    let identifiers = split_ids(ids);
    if identifiers.len() > MAX_ADMIN_IDS {
        return Err(ServerError::BadRequest(format!(
            "At most {MAX_ADMIN_IDS} ids per page"
        )));
    }

    // A failing row is shown as such; it never fails the page.
    let rows: Vec<AdminRow> = identifiers
        .into_iter()
        .map(|identifier| {
            let outcome: Result<ListingOutcome, String> =
                resolve_listing(app.source(), &identifier).map_err(|e| e.to_string());
            AdminRow {
                kind: kind::decode(&identifier),
                identifier,
                outcome,
            }
        })
        .collect();

    html_response(pages::admin_properties_page(&rows))
}

/// Comma or whitespace separated ids, blanks dropped, first occurrence kept.
pub fn split_ids(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(str::to_string)
        .collect()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
