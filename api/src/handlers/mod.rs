//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod businesses;
pub mod health;

pub use businesses::{
    create_business, delete_business, get_business, list_businesses, update_business,
};
pub use health::{health, not_found};
