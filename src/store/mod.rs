mod dynamodb;
mod memory;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Todo, TodoPatch};

/// Storage-side failures, classified so the handler layer can map each
/// kind to its own status code instead of collapsing everything to 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item not found: {id}")]
    NotFound { id: String },

    #[error("store request failed: {message}")]
    Unavailable { message: String },

    #[error("malformed record: {message}")]
    Corrupt { message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract storage interface for ToDo items, keyed by their generated id.
///
/// Implementations must be thread-safe (Send + Sync) and support async
/// operations.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Inserts the item, overwriting any record with the same id.
    async fn put_todo(&self, todo: &Todo) -> StoreResult<()>;

    /// Returns every stored item, in store-native order.
    async fn scan_todos(&self) -> StoreResult<Vec<Todo>>;

    /// Applies a sparse update and returns the post-update record. The
    /// patch must name at least one field. A missing id is `NotFound`,
    /// never an upsert.
    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<Todo>;

    /// Deletes by id. Deleting an id that does not exist is a no-op.
    async fn delete_todo(&self, id: &str) -> StoreResult<()>;
}
