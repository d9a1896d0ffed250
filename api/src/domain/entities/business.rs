//! Business domain entity
//!
//! The single resource managed by the API: a company with a postal address.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub i64);

impl BusinessId {
    /// The identifier that follows this one, if it fits in an `i64`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BusinessId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A stored business record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub company: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub post_code: String,
}

impl Business {
    /// Build a stored record from validated fields
    pub fn from_new(id: BusinessId, new: NewBusiness) -> Self {
        Self {
            id,
            company: new.company,
            address: new.address,
            city: new.city,
            country: new.country,
            post_code: new.post_code,
        }
    }

    /// Overwrite every field except the id
    pub fn replace_fields(&mut self, new: NewBusiness) {
        self.company = new.company;
        self.address = new.address;
        self.city = new.city;
        self.country = new.country;
        self.post_code = new.post_code;
    }
}

/// Validated data for creating or replacing a business
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBusiness {
    pub company: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub post_code: String,
}

/// Countries a business may be registered in
///
/// Built once from the seed dataset; sorted so error messages are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySet(BTreeSet<String>);

impl CountrySet {
    pub fn from_businesses<'a>(businesses: impl IntoIterator<Item = &'a Business>) -> Self {
        Self(businesses.into_iter().map(|b| b.country.clone()).collect())
    }

    pub fn contains(&self, country: &str) -> bool {
        self.0.contains(country)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CountrySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
