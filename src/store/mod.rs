pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One classified submission. Created once per successful analyze call,
/// never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub text: String,
    pub sentiment: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

/// Append-only collection of sentiment records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, record: SentimentRecord) -> Result<()>;
    async fn find_all(&self) -> Result<Vec<SentimentRecord>>;
    async fn count(&self) -> Result<u64>;
}
