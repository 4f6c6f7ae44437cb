pub mod config;
pub mod connector;
pub mod driver;
pub mod error;
pub mod headers;
pub mod repl;
pub mod results;
pub mod rewrite;

pub use config::ConnectionConfig;
pub use connector::Connector;
pub use driver::{Cursor, Driver, HttpDriver, MockDriver, Row, Session};
pub use error::{ChConnectError, Result};
pub use headers::{ADDITIONAL_HEADERS_ENV, HEADER_OPTION_PREFIX};
pub use repl::InteractiveRepl;
pub use results::format_result;
pub use rewrite::escape_statement;
