use std::collections::HashMap;

use crate::error::{ChConnectError, Result};

pub const ADDITIONAL_HEADERS_ENV: &str = "CLICKHOUSE_ADDITIONAL_HEADERS";

/// Prefix that marks a driver connection option as an HTTP header.
pub const HEADER_OPTION_PREFIX: &str = "header__";

/// Reads extra HTTP headers from `CLICKHOUSE_ADDITIONAL_HEADERS`.
///
/// Returns an empty map when the variable is unset. Each parsed key is
/// namespaced with [`HEADER_OPTION_PREFIX`] so it travels through the
/// driver as a connection option.
pub fn from_env() -> Result<HashMap<String, String>> {
    match std::env::var(ADDITIONAL_HEADERS_ENV) {
        Ok(raw) => parse_dict(&raw),
        Err(_) => Ok(HashMap::new()),
    }
}

/// Parses the `key1=value1,key2=value2` dictionary format.
pub fn parse_dict(raw: &str) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            ChConnectError::Headers(format!("missing '=' in entry '{}'", entry))
        })?;
        headers.insert(
            format!("{}{}", HEADER_OPTION_PREFIX, key.trim()),
            value.trim().to_string(),
        );
    }
    Ok(headers)
}
