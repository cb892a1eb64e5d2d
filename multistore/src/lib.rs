pub mod error;
pub mod multi;
pub mod observability;
pub mod protoboard;
pub mod store;

pub use error::{Result, StoreError};
pub use multi::MultiStore;
pub use protoboard::{Protoboard, ProtoboardMeta};
pub use store::{MemoryStore, Resource, Store};
