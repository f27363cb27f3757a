use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "TodoTable".to_string()),
        }
    }
}
