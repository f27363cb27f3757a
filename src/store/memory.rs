use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{Todo, TodoPatch};

use super::{StoreError, StoreResult, TodoStore};

/// In-memory implementation backed by a mutex-guarded map. Used by the
/// integration tests and for local runs without AWS credentials.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn put_todo(&self, todo: &Todo) -> StoreResult<()> {
        self.items
            .lock()
            .unwrap()
            .insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn scan_todos(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.items.lock().unwrap().values().cloned().collect())
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<Todo> {
        let mut items = self.items.lock().unwrap();
        let todo = items
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if let Some(task) = &patch.task {
            todo.task = task.clone();
        }
        if let Some(status) = &patch.status {
            todo.status = status.clone();
        }

        Ok(todo.clone())
    }

    async fn delete_todo(&self, id: &str) -> StoreResult<()> {
        self.items.lock().unwrap().remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            task: "buy milk".to_string(),
            status: "pending".to_string(),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn put_overwrites_by_id() {
        let store = MemoryStore::new();
        store.put_todo(&sample_todo("a")).await.unwrap();

        let mut replacement = sample_todo("a");
        replacement.task = "buy bread".to_string();
        store.put_todo(&replacement).await.unwrap();

        let todos = store.scan_todos().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].task, "buy bread");
    }

    #[tokio::test]
    async fn update_touches_only_supplied_fields() {
        let store = MemoryStore::new();
        store.put_todo(&sample_todo("a")).await.unwrap();

        let patch = TodoPatch {
            status: Some("done".to_string()),
            ..Default::default()
        };
        let updated = store.update_todo("a", &patch).await.unwrap();

        assert_eq!(updated.status, "done");
        assert_eq!(updated.task, "buy milk");
        assert_eq!(updated.created_at, "2026-01-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let store = MemoryStore::new();
        let patch = TodoPatch {
            status: Some("done".to_string()),
            ..Default::default()
        };

        let err = store.update_todo("missing", &patch).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_is_a_no_op_for_missing_ids() {
        let store = MemoryStore::new();
        store.put_todo(&sample_todo("a")).await.unwrap();

        store.delete_todo("a").await.unwrap();
        store.delete_todo("a").await.unwrap();

        assert!(store.scan_todos().await.unwrap().is_empty());
    }
}
