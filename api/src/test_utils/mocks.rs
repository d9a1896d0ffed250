//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{Business, BusinessId, NewBusiness};
use crate::domain::ports::BusinessRepository;
use crate::error::DomainError;

/// Repository whose every call fails, for exercising error paths
pub struct FailingBusinessRepository;

fn failure() -> DomainError {
    DomainError::Internal("storage unavailable".to_string())
}

#[async_trait]
impl BusinessRepository for FailingBusinessRepository {
    async fn list(&self) -> Result<Vec<Business>, DomainError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: BusinessId) -> Result<Option<Business>, DomainError> {
        Err(failure())
    }

    async fn create(&self, _business: &NewBusiness) -> Result<Business, DomainError> {
        Err(failure())
    }

    async fn update(
        &self,
        _id: BusinessId,
        _business: &NewBusiness,
    ) -> Result<Business, DomainError> {
        Err(failure())
    }

    async fn delete(&self, _id: BusinessId) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Err(failure())
    }
}
