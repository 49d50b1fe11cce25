use crate::domain::Kind;
use crate::fetcher::{request_path, FetchError, RecordSource};
use astra::Response;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;

/// In-memory record service keyed by identifier. Unknown ids answer 404.
#[derive(Default)]
pub struct StubSource {
    records: HashMap<String, Value>,
    failing: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, identifier: &str, payload: Value) -> Self {
        self.records.insert(identifier.to_string(), payload);
        self
    }

    /// Make `identifier` fail with a network error.
    pub fn with_failure(mut self, identifier: &str, message: &str) -> Self {
        self.failing
            .insert(identifier.to_string(), message.to_string());
        self
    }

    /// Paths requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl RecordSource for StubSource {
    fn fetch(&self, kind: &Kind, identifier: &str) -> Result<Value, FetchError> {
        let path = request_path(kind, identifier)?;
        self.requested.lock().unwrap().push(path.clone());

        if let Some(message) = self.failing.get(identifier) {
            return Err(FetchError::Network(message.clone()));
        }

        self.records
            .get(identifier)
            .cloned()
            .ok_or(FetchError::Status { status: 404, url: path })
    }
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub const PLOT_SELL_ID: &str = "XXXRESSEPL0000001";
pub const PLOT_RENT_ID: &str = "XXXCOMREPL0000002";
pub const PLOT_LEASE_ID: &str = "XXXCOMLEPL0000003";
pub const AGRI_SALE_ID: &str = "XXXRESSEAG0000004";
pub const AGRI_LEASE_ID: &str = "XXXCOMLEAG0000005";
pub const UNKNOWN_LISTING_ID: &str = "XXXRESZZPL0000006";

pub fn plot_sell_payload() -> Value {
    json!({
        "basicInformation": {
            "title": "Corner plot near ring road",
            "address": { "street": "", "city": "Pune", "state": "MH", "zipCode": "" }
        },
        "plotDetails": {
            "totalPlotArea": 2400,
            "areaUnit": "sq ft",
            "boundaryWall": true,
            "roadAccess": "30 ft"
        },
        "pricingDetails": { "propertyPrice": 2500000, "priceType": "Fixed" },
        "media": { "photos": { "plot": ["p1.jpg", "p2.jpg", "p1.jpg"] } }
    })
}

pub fn plot_rent_payload() -> Value {
    json!({
        "basicInformation": { "title": "Fenced yard for parking" },
        "propertyDetails": {
            "address": { "street": "Plot 7, MIDC", "city": "Nashik", "state": "MH", "zipCode": 422010 },
            "waterAndSewer": "yes"
        },
        "rentalTerms": {
            "rentDetails": { "expectedRent": "45,000", "rentType": "Monthly" },
            "securityDeposit": "2 months"
        },
        "media": {
            "photos": {
                "exterior": ["e1.jpg", ""],
                "interior": [],
                "documents": ["doc.pdf", "e1.jpg"]
            }
        },
        "photos": ["legacy.jpg", null]
    })
}

pub fn plot_lease_payload() -> Value {
    json!({
        "plotDetails": {
            "basicInformation": { "title": "Industrial plot on long lease" },
            "address": { "city": "Chakan", "state": "MH" },
            "totalPlotArea": "1 acre"
        },
        "leaseTerms": {
            "leaseAmount": { "amount": 120000, "amountType": "Per year" },
            "leaseTenure": "10 years"
        }
    })
}

pub fn agriculture_sale_payload() -> Value {
    json!({
        "basicInformation": {
            "title": "Mango orchard",
            "address": { "street": "Survey 12", "city": "Ratnagiri", "state": "MH", "zipCode": "415612" }
        },
        "Agriculturelanddetails": {
            "totalArea": 5,
            "areaUnit": "acres",
            "boundaryWall": false,
            "waterSewer": true,
            "roadAccess": "Village road",
            "previousConstruction": "None"
        },
        "price": { "expectedPrice": 0, "isNegotiable": true },
        "rent": { "expectedRent": 30000 },
        "media": { "photos": { "exterior": ["orchard.jpg", "well.jpg"] } }
    })
}

pub fn agriculture_lease_payload() -> Value {
    json!({
        "basicInformation": { "title": "Paddy field on lease" },
        "Agriculturelanddetails": { "previousConstruction": "Farm shed" },
        "leaseTerms": {
            "leaseAmount": { "amount": 50000 },
            "leaseTenure": { "duration": "3 years", "lockInPeriod": "1 year" }
        }
    })
}
