//! CRUD API for ToDo items, served from a single Lambda behind API Gateway
//! and backed by DynamoDB.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod router;
pub mod store;
