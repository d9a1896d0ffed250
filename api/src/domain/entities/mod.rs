//! Domain entities
//!
//! Pure domain models with no knowledge of HTTP or storage.

pub mod business;

pub use business::{Business, BusinessId, CountrySet, NewBusiness};
