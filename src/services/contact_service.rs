//! Contact service layer.
//!
//! Owns the contact collection and its store. Presentation adapters hold an
//! `Arc<dyn ContactService>` built once at startup; every successful mutation
//! is saved before the call returns.

use crate::collection::ContactCollection;
use crate::error::{ServiceError, ServiceResult, StorageError};
use crate::models::{Contact, ContactUpdate, NewContact};
use crate::repositories::ContactStore;
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Contact operations exposed to presentation adapters.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Every contact, in display order.
    async fn list_contacts(&self) -> Vec<Contact>;

    /// Contacts matching `query` in any field, ignoring case.
    async fn search_contacts(&self, query: &str) -> Vec<Contact>;

    /// A single contact by ID.
    async fn get_contact(&self, contact_id: &str) -> Option<Contact>;

    /// Create a contact with a fresh ID and persist the collection.
    async fn add_contact(&self, new_contact: NewContact) -> ServiceResult<Contact>;

    /// Apply a partial update and persist the collection.
    async fn update_contact(&self, contact_id: &str, update: ContactUpdate)
        -> ServiceResult<Contact>;

    /// Remove a contact and persist the collection.
    async fn delete_contact(&self, contact_id: &str) -> ServiceResult<Contact>;

    /// Number of contacts currently held.
    async fn contact_count(&self) -> usize;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    collection: Arc<RwLock<ContactCollection>>,
    store: Arc<dyn ContactStore>,
}

impl ContactServiceImpl {
    /// Create a service over an already-loaded collection.
    pub fn new(collection: ContactCollection, store: Arc<dyn ContactStore>) -> Self {
        Self {
            collection: Arc::new(RwLock::new(collection)),
            store,
        }
    }

    /// Load the collection from `store` and wrap it in a service.
    pub fn load(store: Arc<dyn ContactStore>) -> Self {
        let collection = store.load();
        Self::new(collection, store)
    }

    /// Save after a successful mutation. The mutation stays applied in
    /// memory even if the save fails.
    ///
    /// The store does blocking file I/O, so a snapshot is saved on the
    /// blocking pool. Callers hold the write guard across this await.
    async fn persist(&self, collection: &ContactCollection) -> ServiceResult<()> {
        let store = Arc::clone(&self.store);
        let snapshot = collection.clone();

        let result = tokio::task::spawn_blocking(move || store.save(&snapshot))
            .await
            .unwrap_or_else(|e| Err(StorageError::Io(io::Error::other(e.to_string()))));

        result.map_err(|e| {
            error!("Change kept in memory but not saved: {}", e);
            ServiceError::Storage(e)
        })
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> Vec<Contact> {
        self.collection.read().await.list_all()
    }

    async fn search_contacts(&self, query: &str) -> Vec<Contact> {
        self.collection.read().await.search(query)
    }

    async fn get_contact(&self, contact_id: &str) -> Option<Contact> {
        self.collection.read().await.get(contact_id).cloned()
    }

    async fn add_contact(&self, new_contact: NewContact) -> ServiceResult<Contact> {
        let mut collection = self.collection.write().await;
        let added = collection.add(new_contact.into_contact())?.clone();
        self.persist(&collection).await?;
        Ok(added)
    }

    async fn update_contact(
        &self,
        contact_id: &str,
        update: ContactUpdate,
    ) -> ServiceResult<Contact> {
        let mut collection = self.collection.write().await;
        let updated = collection.update(contact_id, &update)?.clone();
        self.persist(&collection).await?;
        Ok(updated)
    }

    async fn delete_contact(&self, contact_id: &str) -> ServiceResult<Contact> {
        let mut collection = self.collection.write().await;
        let removed = collection.delete(contact_id)?;
        self.persist(&collection).await?;
        Ok(removed)
    }

    async fn contact_count(&self) -> usize {
        self.collection.read().await.len()
    }
}
