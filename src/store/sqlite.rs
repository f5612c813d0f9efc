use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use super::{RecordStore, SentimentRecord};

/// SQLite-backed record store. Each record is stored as one JSON document per
/// row; the integer rowid never leaves this module.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS sentiment_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                record TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn insert(&self, record: SentimentRecord) -> Result<()> {
        let json = serde_json::to_string(&record)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO sentiment_records (record) VALUES (?1)",
            [&json],
        )?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SentimentRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT record FROM sentiment_records ORDER BY id ASC")?;
        let jsons = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let records = jsons
            .iter()
            .map(|json| serde_json::from_str(json))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn count(&self) -> Result<u64> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sentiment_records", [], |row| {
            row.get(0)
        })?;
        Ok(count as u64)
    }
}
