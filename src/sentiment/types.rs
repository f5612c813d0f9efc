use anyhow::Result;
use async_trait::async_trait;

/// One classification outcome. The label is reported exactly as the backend
/// produced it (upper-case for both built-in backends); callers decide casing.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

#[async_trait]
pub trait SentimentModel: Send + Sync {
    fn name(&self) -> &'static str;
    async fn classify(&self, text: &str) -> Result<Prediction>;
}
