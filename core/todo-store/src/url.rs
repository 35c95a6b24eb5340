//! Connection strings for selecting a store backend.
//!
//! Accepted forms:
//!
//! - `memory://`: process memory
//! - `duckdb://:memory:`: in-memory DuckDB
//! - `duckdb://<path>`: DuckDB database file at `<path>`

use crate::{DuckDbItemStore, ItemStore, MemoryItemStore, StoreError, StoreResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// A parsed store connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    Memory,
    DuckDbMemory,
    DuckDbFile(PathBuf),
}

impl FromStr for StoreUrl {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| StoreError::InvalidUrl(format!("missing scheme in '{s}'")))?;

        match scheme {
            "memory" if rest.is_empty() => Ok(StoreUrl::Memory),
            "memory" => Err(StoreError::InvalidUrl(format!(
                "memory store takes no location, got '{rest}'"
            ))),
            "duckdb" if rest == ":memory:" => Ok(StoreUrl::DuckDbMemory),
            "duckdb" if rest.is_empty() => Err(StoreError::InvalidUrl(
                "duckdb store needs a file path".to_string(),
            )),
            "duckdb" => Ok(StoreUrl::DuckDbFile(PathBuf::from(rest))),
            other => Err(StoreError::InvalidUrl(format!("unsupported scheme '{other}'"))),
        }
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreUrl::Memory => write!(f, "memory://"),
            StoreUrl::DuckDbMemory => write!(f, "duckdb://:memory:"),
            StoreUrl::DuckDbFile(path) => write!(f, "duckdb://{}", path.display()),
        }
    }
}

/// Opens the backend named by `url`.
pub fn open_store(url: &StoreUrl) -> StoreResult<Arc<dyn ItemStore>> {
    let store: Arc<dyn ItemStore> = match url {
        StoreUrl::Memory => Arc::new(MemoryItemStore::new()),
        StoreUrl::DuckDbMemory => Arc::new(DuckDbItemStore::open_in_memory()?),
        StoreUrl::DuckDbFile(path) => Arc::new(DuckDbItemStore::open(path)?),
    };
    Ok(store)
}
