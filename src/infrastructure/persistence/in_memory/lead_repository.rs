//! # In-Memory Lead Repository
//!
//! In-memory implementation of [`LeadRepository`].
//!
//! Used by tests and when the server runs without a database URL. Leads
//! are lost on restart.

use crate::domain::entities::Lead;
use crate::domain::value_objects::LeadId;
use crate::infrastructure::persistence::traits::{
    LeadRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`LeadRepository`].
///
/// Uses a thread-safe `HashMap` keyed by lead id.
#[derive(Debug, Clone)]
pub struct InMemoryLeadRepository {
    storage: Arc<RwLock<HashMap<LeadId, Lead>>>,
}

impl InMemoryLeadRepository {
    /// Creates a new empty in-memory lead repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored leads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if no leads are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets a lead by id.
    pub async fn get(&self, id: &LeadId) -> Option<Lead> {
        let storage = self.storage.read().await;
        storage.get(id).cloned()
    }

    /// Returns all leads, oldest first.
    pub async fn all(&self) -> Vec<Lead> {
        let storage = self.storage.read().await;
        let mut leads: Vec<Lead> = storage.values().cloned().collect();
        leads.sort_by_key(|lead| (lead.created_at(), lead.id()));
        leads
    }

    /// Returns the number of stored leads, waiting for the lock.
    pub async fn count(&self) -> u64 {
        let storage = self.storage.read().await;
        storage.len() as u64
    }
}

impl Default for InMemoryLeadRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn insert(&self, lead: &Lead) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        if storage.contains_key(&lead.id()) {
            return Err(RepositoryError::duplicate("Lead", lead.id().to_string()));
        }
        storage.insert(lead.id(), lead.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{QuoteBreakdown, QuoteLineItem};
    use crate::domain::value_objects::Money;

    fn breakdown() -> QuoteBreakdown {
        let line =
            QuoteLineItem::price("web_dev", "Web Development", Money::from_units(500), 1).unwrap();
        QuoteBreakdown::from_parts(
            vec![line],
            Money::from_units(500),
            Money::from_units(50),
            Money::from_units(550),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryLeadRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn save_assigns_id_and_stores() {
        let repo = InMemoryLeadRepository::new();

        let lead = repo
            .save(breakdown(), Some("lead@example.com".into()))
            .await
            .unwrap();

        let stored = repo.get(&lead.id()).await.unwrap();
        assert_eq!(stored, lead);
        assert_eq!(stored.email(), "lead@example.com");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let repo = InMemoryLeadRepository::new();
        let lead = Lead::new(breakdown(), None);

        repo.insert(&lead).await.unwrap();
        let err = repo.insert(&lead).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate { .. }));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn all_returns_every_lead() {
        let repo = InMemoryLeadRepository::new();
        let first = repo.save(breakdown(), None).await.unwrap();
        let second = repo.save(breakdown(), None).await.unwrap();

        let all = repo.all().await;
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));
    }

    #[tokio::test]
    async fn concurrent_saves_do_not_interfere() {
        let repo = InMemoryLeadRepository::new();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.save(breakdown(), None).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(repo.count().await, 16);
    }

    #[tokio::test]
    async fn health_check_defaults_to_healthy() {
        let repo = InMemoryLeadRepository::new();
        assert!(repo.health_check().await.unwrap());
    }
}
