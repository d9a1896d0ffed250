//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, validation, and ports.

pub mod business_service;

pub use business_service::BusinessService;
