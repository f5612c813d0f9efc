use super::types::{Prediction, SentimentModel};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Hosted text-classification backend. Speaks the Hugging Face inference API
/// shape: `POST {api_url}/models/{name}` with `{"inputs": text}`.
pub struct RemoteModel {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

impl RemoteModel {
    pub fn new(api_url: Option<&str>, api_key: Option<&str>, model: Option<&str>) -> Self {
        let api_url = api_url.unwrap_or(DEFAULT_API_URL);
        let model = model.unwrap_or(DEFAULT_MODEL);
        info!("Remote sentiment model initialized (model: {})", model);
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(String::from),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl SentimentModel for RemoteModel {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Result<Prediction> {
        let url = format!("{}/models/{}", self.api_url, self.model);
        let body = serde_json::json!({ "inputs": text });

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Sentiment API error: {} {}", status, body);
        }

        // The classification endpoint returns one list of {label, score}
        // candidates per input; keep the highest-scoring one.
        let data: Vec<Vec<LabelScore>> = resp.json().await?;
        let best = data
            .into_iter()
            .flatten()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .context("Sentiment API returned no predictions")?;

        Ok(Prediction {
            label: best.label,
            score: best.score,
        })
    }
}
