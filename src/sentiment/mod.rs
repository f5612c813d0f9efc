mod lexicon;
mod remote;
mod types;

use crate::config::Config;
use anyhow::Result;
pub use lexicon::LexiconModel;
pub use remote::RemoteModel;
use std::sync::Arc;
pub use types::{Prediction, SentimentModel};

pub fn create_sentiment_model(config: &Config) -> Result<Arc<dyn SentimentModel>> {
    match config.model_provider.as_str() {
        "remote" => Ok(Arc::new(RemoteModel::new(
            config.model_api_url.as_deref(),
            config.model_api_key.as_deref(),
            config.model_name.as_deref(),
        ))),
        _ => Ok(Arc::new(LexiconModel::new())),
    }
}
