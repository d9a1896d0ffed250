//! Repository port traits
//!
//! These traits define the interface for business storage.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Business, BusinessId, NewBusiness};
use crate::error::DomainError;

/// Repository for Business entities
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// List every business ordered by ascending id
    async fn list(&self) -> Result<Vec<Business>, DomainError>;

    /// Find a business by ID
    async fn find_by_id(&self, id: BusinessId) -> Result<Option<Business>, DomainError>;

    /// Store a new business under the next free id (max existing id + 1)
    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError>;

    /// Replace every field except the id.
    /// Returns `DomainError::NotFound` if no business has this id.
    async fn update(&self, id: BusinessId, business: &NewBusiness)
        -> Result<Business, DomainError>;

    /// Remove a business.
    /// Returns `DomainError::NotFound` if no business has this id.
    async fn delete(&self, id: BusinessId) -> Result<(), DomainError>;

    /// Number of stored businesses
    async fn count(&self) -> Result<usize, DomainError>;
}
