use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::ConnectionConfig;
use crate::driver::{Cursor, Driver, HttpDriver, Row, Session};
use crate::error::Result;
use crate::headers;
use crate::rewrite::escape_statement;

/// Executes ad-hoc SQL over a single lazily-opened session.
///
/// The session is created on the first query after [`connect`] and reused
/// until [`reset_session`] closes it. One connector owns at most one live
/// session; sharing a connector across tasks is not supported.
///
/// [`connect`]: Connector::connect
/// [`reset_session`]: Connector::reset_session
pub struct Connector {
    driver: Arc<dyn Driver>,
    uri: String,
    additional_headers: HashMap<String, String>,
    session: Option<Box<dyn Session>>,
}

impl Connector {
    /// Connector backed by the ClickHouse HTTP interface.
    pub fn http() -> Self {
        Self::with_driver(Arc::new(HttpDriver::new()))
    }

    pub fn with_driver(driver: Arc<dyn Driver>) -> Self {
        Self {
            driver,
            uri: String::new(),
            additional_headers: HashMap::new(),
            session: None,
        }
    }

    /// Stores the connection identifier and reads extra HTTP headers from
    /// `CLICKHOUSE_ADDITIONAL_HEADERS`.
    ///
    /// A session left over from an earlier `connect` is abandoned, not
    /// closed; call [`reset_session`](Connector::reset_session) first if it
    /// must be torn down.
    pub fn connect(&mut self, config: &ConnectionConfig) -> Result<()> {
        self.uri = config.uri();
        debug!(uri = %self.uri, "connection identifier");
        self.additional_headers = headers::from_env()?;
        self.session = None;
        Ok(())
    }

    /// Rewrites the statement, opens a session if none is cached, and
    /// executes. Connection and query errors propagate unmodified; there is
    /// no retry.
    pub async fn query_with_session(&mut self, statement: &str) -> Result<Box<dyn Cursor>> {
        let statement = escape_statement(statement);
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                self.driver
                    .open(&self.uri, &self.additional_headers)
                    .await?
            }
        };
        let session = self.session.insert(session);
        debug!(sql = %statement, "executing statement");
        session.execute(&statement).await
    }

    /// Closes the cached session, if any. Idempotent.
    pub async fn reset_session(&mut self) -> Result<()> {
        if let Some(mut session) = self.session.take() {
            session.close().await?;
        }
        Ok(())
    }

    /// Runs the statement and drains every result row, closing the cursor
    /// afterwards.
    pub async fn fetch_all(&mut self, statement: &str) -> Result<Vec<Row>> {
        let mut cursor = self.query_with_session(statement).await?;
        let rows = cursor.fetch_all().await?;
        cursor.close().await?;
        Ok(rows)
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn additional_headers(&self) -> &HashMap<String, String> {
        &self.additional_headers
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}
