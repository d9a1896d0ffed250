//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::{Business, BusinessId, CountrySet, NewBusiness};

/// Create a stored business with the given id
pub fn test_business(id: i64) -> Business {
    Business {
        id: BusinessId(id),
        company: format!("Company {}", id),
        address: format!("{} Nancy Place", id),
        city: "Szeged".to_string(),
        country: "Hungary".to_string(),
        post_code: "6748".to_string(),
    }
}

/// Validated fields matching `valid_body`
pub fn test_new_business() -> NewBusiness {
    NewBusiness {
        company: "My Company".to_string(),
        address: "123 Oak Street".to_string(),
        city: "My City".to_string(),
        country: "Canada".to_string(),
        post_code: "V7T".to_string(),
    }
}

/// A request body that passes validation
pub fn valid_body() -> Value {
    json!({
        "company": "My Company",
        "address": "123 Oak Street",
        "city": "My City",
        "country": "Canada",
        "post_code": "V7T"
    })
}

/// Allowed countries used by service-level tests
pub fn test_countries() -> CountrySet {
    ["Canada", "Hungary", "Singapore"].into_iter().collect()
}
