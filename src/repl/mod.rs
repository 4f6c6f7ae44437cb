use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::connector::Connector;
use crate::error::Result;
use crate::results::format_result;

const PROMPT: &str = "chconnect> ";

/// Line-by-line shell over one connector session.
pub struct InteractiveRepl {
    connector: Connector,
}

impl InteractiveRepl {
    pub fn new(connector: Connector) -> Self {
        Self { connector }
    }

    /// Reads statements until `exit`, `quit`, or EOF, then closes the
    /// session. Statement failures are printed and the loop continues.
    pub async fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let statement = line.trim();
                    if statement.is_empty() {
                        continue;
                    }
                    if statement == "exit" || statement == "quit" {
                        break;
                    }
                    let _ = editor.add_history_entry(statement);
                    match self.connector.fetch_all(statement).await {
                        Ok(rows) => print!("{}", format_result(&rows)),
                        Err(e) => eprintln!("error: {e}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("input closed, leaving repl");
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        self.connector.reset_session().await
    }
}
