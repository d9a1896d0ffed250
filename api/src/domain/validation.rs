//! Business field validation
//!
//! Submitted records arrive as raw JSON so every violation can be reported
//! at once, keyed by field name, instead of failing on the first bad field.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{CountrySet, NewBusiness};

pub const COMPANY_MAX_LEN: usize = 100;
pub const ADDRESS_MAX_LEN: usize = 200;
pub const CITY_MAX_LEN: usize = 50;
pub const POST_CODE_MAX_LEN: usize = 20;

pub const REQUIRED_MESSAGE: &str = "The field is required";
pub const NOT_A_STRING_MESSAGE: &str = "Must be a string";
pub const NOT_AN_INTEGER_MESSAGE: &str = "Must be an integer";

pub fn max_length_message(max: usize) -> String {
    format!("Must have no more than {} characters", max)
}

/// Field name to message, serialized as a flat JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Checks submitted business bodies against the field rules
#[derive(Debug, Clone)]
pub struct BusinessValidator {
    countries: CountrySet,
}

impl BusinessValidator {
    pub fn new(countries: CountrySet) -> Self {
        Self { countries }
    }

    /// Validate a JSON object and extract the business fields.
    ///
    /// Unknown fields are ignored, and so is `id` as long as it is an integer
    /// or null.
    pub fn validate(&self, body: &Map<String, Value>) -> Result<NewBusiness, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(id) = body.get("id") {
            if !(id.is_null() || id.is_i64() || id.is_u64()) {
                errors.add("id", NOT_AN_INTEGER_MESSAGE);
            }
        }

        let company = required_string(body, "company", COMPANY_MAX_LEN, &mut errors);
        let address = required_string(body, "address", ADDRESS_MAX_LEN, &mut errors);
        let city = required_string(body, "city", CITY_MAX_LEN, &mut errors);
        let country = required_string(body, "country", usize::MAX, &mut errors)
            .and_then(|c| self.check_country(c, &mut errors));
        let post_code = optional_string(body, "post_code", POST_CODE_MAX_LEN, &mut errors);

        match (company, address, city, country, post_code) {
            (Some(company), Some(address), Some(city), Some(country), Some(post_code))
                if errors.is_empty() =>
            {
                Ok(NewBusiness {
                    company,
                    address,
                    city,
                    country,
                    post_code,
                })
            }
            _ => Err(errors),
        }
    }

    fn check_country(&self, country: String, errors: &mut ValidationErrors) -> Option<String> {
        if self.countries.contains(&country) {
            return Some(country);
        }
        let allowed: Vec<&str> = self.countries.iter().collect();
        errors.add("country", format!("Must be one of {}", allowed.join(", ")));
        None
    }
}

fn required_string(
    body: &Map<String, Value>,
    field: &str,
    max_len: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, REQUIRED_MESSAGE);
            None
        }
        Some(value) => checked_string(value, field, max_len, errors),
    }
}

fn optional_string(
    body: &Map<String, Value>,
    field: &str,
    max_len: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => Some(String::new()),
        Some(value) => checked_string(value, field, max_len, errors),
    }
}

fn checked_string(
    value: &Value,
    field: &str,
    max_len: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let Some(s) = value.as_str() else {
        errors.add(field, NOT_A_STRING_MESSAGE);
        return None;
    };
    if s.chars().count() > max_len {
        errors.add(field, max_length_message(max_len));
        return None;
    }
    Some(s.to_string())
}
