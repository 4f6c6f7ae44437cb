mod http;
mod mock;

pub use http::HttpDriver;
pub use mock::MockDriver;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

/// One result row, column values in projection order.
pub type Row = Vec<serde_json::Value>;

/// Factory for database sessions, injected into the connector so tests can
/// substitute a fake without a live server.
#[async_trait]
pub trait Driver: Send + Sync {
    async fn open(
        &self,
        uri: &str,
        options: &HashMap<String, String>,
    ) -> Result<Box<dyn Session>>;
}

/// A live logical connection, reused across queries until closed.
#[async_trait]
pub trait Session: Send {
    async fn execute(&mut self, sql: &str) -> Result<Box<dyn Cursor>>;
    async fn close(&mut self) -> Result<()>;
}

/// Handle over the result set of one executed statement.
#[async_trait]
pub trait Cursor: Send {
    async fn fetch_all(&mut self) -> Result<Vec<Row>>;
    async fn close(&mut self) -> Result<()>;
}
