//! DuckDB-backed item collection.
//!
//! Items are stored as JSON documents in one table. The `seq` column comes
//! from a sequence and only exists to give `list` a stable insertion order.

use crate::{open_duckdb_with_wal_recovery, DeleteOutcome, ItemStore, StoreError, StoreResult};
use async_trait::async_trait;
use duckdb::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use todo_types::{Item, ItemId, ItemUpdate, NewItem};
use tracing::debug;

/// Item collection persisted in a DuckDB database.
#[derive(Clone)]
pub struct DuckDbItemStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDbItemStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = open_duckdb_with_wal_recovery(path)?;
        Self::open_with_conn(Arc::new(Mutex::new(conn)))
    }

    /// Opens an in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::open_with_conn(Arc::new(Mutex::new(conn)))
    }

    /// Wraps an existing connection and makes sure the schema exists.
    pub fn open_with_conn(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE SEQUENCE IF NOT EXISTS todos_seq START 1;

            CREATE TABLE IF NOT EXISTS todos (
                seq BIGINT NOT NULL DEFAULT nextval('todos_seq'),
                id VARCHAR PRIMARY KEY,
                doc VARCHAR NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection mutex poisoned".to_string()))
    }

    /// Returns every stored item in insertion order.
    pub fn list_items(&self) -> StoreResult<Vec<Item>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT doc FROM todos ORDER BY seq")?;
        let docs = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut items = Vec::new();
        for doc in docs {
            items.push(serde_json::from_str(&doc?)?);
        }
        Ok(items)
    }

    /// Persists a new item built from `new`.
    pub fn insert_item(&self, new: NewItem) -> StoreResult<Item> {
        let item = Item::create(new)?;
        let doc = serde_json::to_string(&item)?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO todos (id, doc) VALUES (?, ?)",
            params![item.id.to_string(), doc],
        )?;
        debug!("Inserted item {}", item.id);
        Ok(item)
    }

    /// Overwrites the document for `id`.
    pub fn replace_item(&self, id: ItemId, update: ItemUpdate) -> StoreResult<Item> {
        update.validate()?;
        let item = Item {
            id,
            title: update.title,
            completed: update.completed,
        };
        let doc = serde_json::to_string(&item)?;

        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE todos SET doc = ? WHERE id = ?",
            params![doc, id.to_string()],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        debug!("Replaced item {}", id);
        Ok(item)
    }

    /// Removes the document for `id`, if any.
    pub fn delete_item(&self, id: ItemId) -> StoreResult<DeleteOutcome> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM todos WHERE id = ?", params![id.to_string()])?;
        debug!("Delete of item {} removed {} row(s)", id, removed);
        Ok(if removed > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::Absent
        })
    }

    /// Returns the number of stored items.
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Runs a blocking DuckDB call off the async executor.
async fn run_blocking<T, F>(f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Unavailable(format!("storage task failed: {e}")))?
}

#[async_trait]
impl ItemStore for DuckDbItemStore {
    fn backend_name(&self) -> &'static str {
        "duckdb"
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        let store = self.clone();
        run_blocking(move || store.list_items()).await
    }

    async fn create(&self, new: NewItem) -> StoreResult<Item> {
        let store = self.clone();
        run_blocking(move || store.insert_item(new)).await
    }

    async fn replace(&self, id: ItemId, update: ItemUpdate) -> StoreResult<Item> {
        let store = self.clone();
        run_blocking(move || store.replace_item(id, update)).await
    }

    async fn delete(&self, id: ItemId) -> StoreResult<DeleteOutcome> {
        let store = self.clone();
        run_blocking(move || store.delete_item(id)).await
    }
}
