//! In-memory adapter for BusinessRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Business, BusinessId, NewBusiness};
use crate::domain::ports::BusinessRepository;
use crate::error::{DomainError, BUSINESS_NOT_FOUND};

/// Process-lifetime business store.
///
/// Keyed by a `BTreeMap` so listing is already in ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryBusinessRepository {
    businesses: RwLock<BTreeMap<BusinessId, Business>>,
}

impl InMemoryBusinessRepository {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with seed records.
    /// Seed ids must already be unique.
    pub fn with_businesses(businesses: impl IntoIterator<Item = Business>) -> Self {
        let map = businesses.into_iter().map(|b| (b.id, b)).collect();
        Self {
            businesses: RwLock::new(map),
        }
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound(BUSINESS_NOT_FOUND.to_string())
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn list(&self) -> Result<Vec<Business>, DomainError> {
        let businesses = self.businesses.read().await;
        Ok(businesses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BusinessId) -> Result<Option<Business>, DomainError> {
        let businesses = self.businesses.read().await;
        Ok(businesses.get(&id).cloned())
    }

    async fn create(&self, new: &NewBusiness) -> Result<Business, DomainError> {
        let mut businesses = self.businesses.write().await;

        // max + 1, not len + 1: ids must not collide after deletions
        let id = match businesses.keys().next_back() {
            Some(max) => max
                .next()
                .ok_or_else(|| DomainError::Internal("Business id space exhausted".to_string()))?,
            None => BusinessId(1),
        };

        let business = Business::from_new(id, new.clone());
        businesses.insert(id, business.clone());
        Ok(business)
    }

    async fn update(&self, id: BusinessId, new: &NewBusiness) -> Result<Business, DomainError> {
        let mut businesses = self.businesses.write().await;
        let business = businesses.get_mut(&id).ok_or_else(not_found)?;
        business.replace_fields(new.clone());
        Ok(business.clone())
    }

    async fn delete(&self, id: BusinessId) -> Result<(), DomainError> {
        let mut businesses = self.businesses.write().await;
        businesses.remove(&id).map(|_| ()).ok_or_else(not_found)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.businesses.read().await.len())
    }
}
