use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{Cursor, Driver, Row, Session};
use crate::error::{ChConnectError, Result};

/// In-memory driver with scripted results and a call journal.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the connector owns another.
#[derive(Clone, Default)]
pub struct MockDriver {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    opens: Vec<(String, HashMap<String, String>)>,
    executed: Vec<String>,
    sessions_closed: usize,
    cursors_closed: usize,
    results: VecDeque<Vec<Row>>,
    fail_open: Option<String>,
    fail_execute: Option<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues rows for the next executed statement. Statements beyond the
    /// queue produce empty results.
    pub fn push_result(&self, rows: Vec<Row>) {
        self.state.lock().unwrap().results.push_back(rows);
    }

    pub fn fail_next_open(&self, message: impl Into<String>) {
        self.state.lock().unwrap().fail_open = Some(message.into());
    }

    pub fn fail_next_execute(&self, message: impl Into<String>) {
        self.state.lock().unwrap().fail_execute = Some(message.into());
    }

    /// Every `(uri, options)` pair passed to `open`, in order.
    pub fn opens(&self) -> Vec<(String, HashMap<String, String>)> {
        self.state.lock().unwrap().opens.clone()
    }

    /// Every statement executed, post-rewrite, in order.
    pub fn executed(&self) -> Vec<String> {
        self.state.lock().unwrap().executed.clone()
    }

    pub fn sessions_closed(&self) -> usize {
        self.state.lock().unwrap().sessions_closed
    }

    pub fn cursors_closed(&self) -> usize {
        self.state.lock().unwrap().cursors_closed
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn open(
        &self,
        uri: &str,
        options: &HashMap<String, String>,
    ) -> Result<Box<dyn Session>> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.fail_open.take() {
            return Err(ChConnectError::Driver(message));
        }
        state.opens.push((uri.to_string(), options.clone()));
        Ok(Box::new(MockSession {
            state: self.state.clone(),
        }))
    }
}

struct MockSession {
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl Session for MockSession {
    async fn execute(&mut self, sql: &str) -> Result<Box<dyn Cursor>> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.fail_execute.take() {
            return Err(ChConnectError::Driver(message));
        }
        state.executed.push(sql.to_string());
        let rows = state.results.pop_front().unwrap_or_default();
        Ok(Box::new(MockCursor {
            state: self.state.clone(),
            rows: Some(rows),
        }))
    }

    async fn close(&mut self) -> Result<()> {
        self.state.lock().unwrap().sessions_closed += 1;
        Ok(())
    }
}

struct MockCursor {
    state: Arc<Mutex<MockState>>,
    rows: Option<Vec<Row>>,
}

#[async_trait]
impl Cursor for MockCursor {
    async fn fetch_all(&mut self) -> Result<Vec<Row>> {
        Ok(self.rows.take().unwrap_or_default())
    }

    async fn close(&mut self) -> Result<()> {
        self.rows = None;
        self.state.lock().unwrap().cursors_closed += 1;
        Ok(())
    }
}
