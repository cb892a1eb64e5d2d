use async_trait::async_trait;

use crate::error::Result;

pub mod memory;

pub use memory::MemoryStore;

/// A value a store can hold. Identity is the ID string and nothing else;
/// two resources with the same ID are considered the same resource.
pub trait Resource: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Contract shared by every backing store and by the aggregator built on
/// top of them. Cancellation follows normal future semantics: dropping a
/// call's future abandons it, the trait carries no deadline of its own.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    async fn all(&self) -> Result<Vec<R>>;
    async fn get(&self, id: &str) -> Result<R>;
    async fn add(&self, resource: R) -> Result<R>;
    async fn update(&self, resource: R) -> Result<()>;
    async fn delete(&self, resource: R) -> Result<()>;
}
