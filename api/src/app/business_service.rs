//! Business service
//!
//! Use cases behind the five CRUD endpoints. Input arrives as raw JSON and
//! is validated here before any repository call.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Business, BusinessId, NewBusiness};
use crate::domain::ports::BusinessRepository;
use crate::domain::validation::BusinessValidator;
use crate::error::{AppError, DomainError, BUSINESS_NOT_FOUND};

/// Service for managing businesses
pub struct BusinessService<BR>
where
    BR: BusinessRepository,
{
    businesses: Arc<BR>,
    validator: BusinessValidator,
}

impl<BR> BusinessService<BR>
where
    BR: BusinessRepository,
{
    pub fn new(businesses: Arc<BR>, validator: BusinessValidator) -> Self {
        Self {
            businesses,
            validator,
        }
    }

    /// All businesses, ascending by id
    pub async fn list(&self) -> Result<Vec<Business>, AppError> {
        Ok(self.businesses.list().await?)
    }

    /// Validate and store a new business under the next id
    pub async fn create(&self, body: &Value) -> Result<Business, AppError> {
        let new = self.validate(body)?;
        let business = self.businesses.create(&new).await?;

        tracing::info!(id = %business.id, company = %business.company, "Created business");
        Ok(business)
    }

    pub async fn get(&self, id: BusinessId) -> Result<Business, AppError> {
        self.businesses
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(BUSINESS_NOT_FOUND.to_string()).into())
    }

    /// Replace every field of an existing business.
    ///
    /// `None` is a path id that cannot name any business. The body is
    /// validated before the id is resolved, so an invalid body is rejected
    /// even when the id does not exist.
    pub async fn update(
        &self,
        id: Option<BusinessId>,
        body: &Value,
    ) -> Result<Business, AppError> {
        let new = self.validate(body)?;
        let id = id.ok_or_else(|| DomainError::NotFound(BUSINESS_NOT_FOUND.to_string()))?;
        let business = self.businesses.update(id, &new).await?;

        tracing::info!(id = %business.id, "Updated business");
        Ok(business)
    }

    pub async fn delete(&self, id: BusinessId) -> Result<(), AppError> {
        self.businesses.delete(id).await?;

        tracing::info!(id = %id, "Deleted business");
        Ok(())
    }

    /// Number of stored businesses
    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.businesses.count().await?)
    }

    fn validate(&self, body: &Value) -> Result<NewBusiness, AppError> {
        let object = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("Must be an object".to_string()))?;
        Ok(self.validator.validate(object)?)
    }
}
