use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::store::{Resource, Store};

/// Read-side facade over an ordered list of backing stores.
///
/// `all` merges every reachable store's resources, deduplicating by ID with
/// the earliest store winning. `get` falls through the stores in order and
/// stops at the first hit. Mutations are refused outright: with several
/// independent backends there is no sensible answer to "which store takes
/// the write", so callers must address a specific backing store instead.
///
/// The store list is fixed at construction. The aggregator holds no other
/// state, so it is safe to share across tasks whenever the individual
/// stores are.
pub struct MultiStore<R: Resource> {
    stores: Vec<Arc<dyn Store<R>>>,
}

impl<R: Resource> MultiStore<R> {
    pub fn new(stores: Vec<Arc<dyn Store<R>>>) -> Self {
        Self { stores }
    }

    /// Backing stores in fallback order.
    pub fn stores(&self) -> &[Arc<dyn Store<R>>] {
        &self.stores
    }
}

#[async_trait]
impl<R: Resource> Store<R> for MultiStore<R> {
    /// Queries each store in order and merges the results. A failing store
    /// is skipped so that as many resources as possible are returned; the
    /// call only fails when every store fails, carrying the last error seen.
    async fn all(&self) -> Result<Vec<R>> {
        let mut merged: Vec<R> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut ok = false;
        let mut last_err: Option<StoreError> = None;

        for (idx, store) in self.stores.iter().enumerate() {
            let resources = match store.all().await {
                Ok(resources) => resources,
                Err(err) => {
                    warn!(store = idx, error = %err, "backing store failed, skipping");
                    last_err = Some(err);
                    continue;
                }
            };
            ok = true;
            for resource in resources {
                // First store in order wins on ID collision.
                if seen.insert(resource.id().to_string()) {
                    merged.push(resource);
                }
            }
        }

        if !ok {
            return Err(last_err.unwrap_or(StoreError::NoBackends));
        }
        Ok(merged)
    }

    /// Tries each store in order and returns the first hit. Later stores
    /// are not contacted once one succeeds. When every store misses, the
    /// last store's error is returned.
    async fn get(&self, id: &str) -> Result<R> {
        let mut last_err: Option<StoreError> = None;

        for (idx, store) in self.stores.iter().enumerate() {
            match store.get(id).await {
                Ok(resource) => return Ok(resource),
                Err(err) => {
                    debug!(store = idx, id, error = %err, "store miss, falling through");
                    last_err = Some(err);
                }
            }
        }

        Err(last_err.unwrap_or(StoreError::NoBackends))
    }

    async fn add(&self, _resource: R) -> Result<R> {
        Err(StoreError::Unsupported("add"))
    }

    async fn update(&self, _resource: R) -> Result<()> {
        Err(StoreError::Unsupported("update"))
    }

    async fn delete(&self, _resource: R) -> Result<()> {
        Err(StoreError::Unsupported("delete"))
    }
}
