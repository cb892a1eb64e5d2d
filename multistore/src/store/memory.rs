use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::store::{Resource, Store};

/// Insertion-ordered in-process store. Ships as the reference `Store`
/// implementation; heavier backends live outside this crate.
pub struct MemoryStore<R: Resource> {
    entries: RwLock<Vec<R>>,
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn with_entries(entries: Vec<R>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryStore<R> {
    async fn all(&self) -> Result<Vec<R>> {
        Ok(self.entries.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<R> {
        self.entries
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn add(&self, resource: R) -> Result<R> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|r| r.id() == resource.id()) {
            return Err(StoreError::AlreadyExists {
                id: resource.id().to_string(),
            });
        }
        entries.push(resource.clone());
        Ok(resource)
    }

    async fn update(&self, resource: R) -> Result<()> {
        let mut entries = self.entries.write().await;
        let id = resource.id().to_string();
        match entries.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = resource;
                Ok(())
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    async fn delete(&self, resource: R) -> Result<()> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|r| r.id() != resource.id());
        if entries.len() == before {
            return Err(StoreError::NotFound {
                id: resource.id().to_string(),
            });
        }
        Ok(())
    }
}
