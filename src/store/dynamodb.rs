use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use crate::config::Config;
use crate::models::{Todo, TodoPatch};

use super::{StoreError, StoreResult, TodoStore};

#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub async fn new(config: &Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&aws_config);
        Self {
            client,
            table_name: config.table_name.clone(),
        }
    }
}

#[async_trait]
impl TodoStore for DynamoStore {
    async fn put_todo(&self, todo: &Todo) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(todo.id.clone()))
            .item("task", AttributeValue::S(todo.task.clone()))
            .item("status", AttributeValue::S(todo.status.clone()))
            .item("created_at", AttributeValue::S(todo.created_at.clone()))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn scan_todos(&self) -> StoreResult<Vec<Todo>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                message: e.to_string(),
            })?;

        // Records that do not parse into the item shape are skipped.
        let todos = result.items().iter().filter_map(item_to_todo).collect();

        Ok(todos)
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> StoreResult<Todo> {
        let mut update_parts = Vec::new();
        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .condition_expression("attribute_exists(id)")
            .return_values(ReturnValue::AllNew);

        if let Some(task) = &patch.task {
            update_parts.push("#t = :t");
            builder = builder
                .expression_attribute_names("#t", "task")
                .expression_attribute_values(":t", AttributeValue::S(task.clone()));
        }

        if let Some(status) = &patch.status {
            // `status` is a DynamoDB reserved word.
            update_parts.push("#s = :s");
            builder = builder
                .expression_attribute_names("#s", "status")
                .expression_attribute_values(":s", AttributeValue::S(status.clone()));
        }

        let expression = format!("SET {}", update_parts.join(", "));
        let result = builder
            .update_expression(expression)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(UpdateItemError::is_conditional_check_failed_exception)
                {
                    StoreError::NotFound { id: id.to_string() }
                } else {
                    StoreError::Unavailable {
                        message: e.to_string(),
                    }
                }
            })?;

        let item = result.attributes().ok_or_else(|| StoreError::Corrupt {
            message: "update returned no attributes".to_string(),
        })?;
        item_to_todo(item).ok_or_else(|| StoreError::Corrupt {
            message: "failed to parse updated item".to_string(),
        })
    }

    async fn delete_todo(&self, id: &str) -> StoreResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable {
                message: e.to_string(),
            })?;

        Ok(())
    }
}

fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Option<Todo> {
    Some(Todo {
        id: item.get("id")?.as_s().ok()?.clone(),
        task: item.get("task")?.as_s().ok()?.clone(),
        status: item.get("status")?.as_s().ok()?.clone(),
        created_at: item.get("created_at")?.as_s().ok()?.clone(),
    })
}
