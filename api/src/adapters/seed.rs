//! Seed dataset loading
//!
//! The store starts from a static JSON array of businesses. A copy ships
//! inside the binary; `SEED_DATA_PATH` points at a replacement file.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{Business, BusinessId};
use crate::error::SeedError;

/// Dataset compiled into the binary
pub const EMBEDDED_SEED: &str = include_str!("../../data/mock_business_data.json");

/// One record as it appears in the dataset file
#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: i64,
    company: String,
    address: String,
    city: String,
    country: String,
    #[serde(default)]
    post_code: Option<String>,
}

impl From<SeedRecord> for Business {
    fn from(r: SeedRecord) -> Self {
        Business {
            id: BusinessId(r.id),
            company: r.company,
            address: r.address,
            city: r.city,
            country: r.country,
            post_code: r.post_code.unwrap_or_default(),
        }
    }
}

/// Parse a seed dataset, rejecting duplicate ids
pub fn parse_seed(json: &str) -> Result<Vec<Business>, SeedError> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id) {
            return Err(SeedError::DuplicateId(record.id));
        }
    }

    Ok(records.into_iter().map(Business::from).collect())
}

/// Load the seed from `path`, or the embedded dataset when no path is given
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Business>, SeedError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed dataset from file");
            let json = std::fs::read_to_string(path)?;
            parse_seed(&json)
        }
        None => {
            tracing::info!("Loading embedded seed dataset");
            parse_seed(EMBEDDED_SEED)
        }
    }
}
