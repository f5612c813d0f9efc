use super::types::{Prediction, SentimentModel};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::info;

const POSITIVE_LABEL: &str = "POSITIVE";
const NEGATIVE_LABEL: &str = "NEGATIVE";

/// In-process sentiment backend built from two word-polarity lexicons.
/// Deterministic and network-free; the default provider.
pub struct LexiconModel {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl LexiconModel {
    pub fn new() -> Self {
        let model = Self {
            positive: Self::positive_lexicon(),
            negative: Self::negative_lexicon(),
        };
        info!(
            "Lexicon sentiment model loaded ({} positive / {} negative terms)",
            model.positive.len(),
            model.negative.len()
        );
        model
    }

    fn score(&self, text: &str) -> Prediction {
        let lowered = text.to_lowercase();
        let mut positive = 0usize;
        let mut negative = 0usize;

        for word in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if self.positive.contains(word) {
                positive += 1;
            }
            if self.negative.contains(word) {
                negative += 1;
            }
        }

        let (label, hits) = if negative > positive {
            (NEGATIVE_LABEL, negative)
        } else {
            (POSITIVE_LABEL, positive)
        };

        // Add-one smoothing keeps the score inside [0.5, 1.0), with exactly
        // 0.5 for text carrying no polar words at all.
        let score = (hits + 1) as f64 / (positive + negative + 2) as f64;

        Prediction {
            label: label.to_string(),
            score,
        }
    }

    fn positive_lexicon() -> HashSet<&'static str> {
        [
            // Praise
            "love", "loved", "loves", "like", "liked", "great", "good", "amazing",
            "awesome", "excellent", "wonderful", "fantastic", "superb", "brilliant",
            "outstanding", "best", "perfect", "favorite",
            // Quality
            "reliable", "solid", "sturdy", "smooth", "fast", "easy", "quality",
            "works", "worth", "impressive", "beautiful", "comfortable",
            // Experience
            "happy", "pleased", "delighted", "satisfied", "impressed", "thrilled",
            "enjoy", "enjoyed", "helpful", "friendly", "recommend", "recommended",
        ]
        .into_iter()
        .collect()
    }

    fn negative_lexicon() -> HashSet<&'static str> {
        [
            // Complaints
            "hate", "hated", "hates", "bad", "terrible", "awful", "horrible",
            "worst", "poor", "disappointing", "disappointed", "disappointment",
            "useless", "waste", "wasted", "overpriced", "misleading", "scam",
            // Defects
            "broken", "broke", "defective", "faulty", "flimsy", "damaged",
            "missing", "buggy", "crash", "crashed", "crashes", "fails", "failed",
            "failure", "unreliable", "slow",
            // Experience
            "annoying", "annoyed", "frustrating", "frustrated", "angry", "upset",
            "regret", "refund", "avoid", "garbage", "junk", "rude", "late",
        ]
        .into_iter()
        .collect()
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentModel for LexiconModel {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<Prediction> {
        Ok(self.score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_scores_positive() {
        let model = LexiconModel::new();
        let prediction = model.score("I love this product, it works great");

        assert_eq!(prediction.label, POSITIVE_LABEL);
        assert!(prediction.score > 0.5);
    }

    #[test]
    fn negative_text_scores_negative() {
        let model = LexiconModel::new();
        let prediction = model.score("Terrible quality, it broke after one day and I hate it");

        assert_eq!(prediction.label, NEGATIVE_LABEL);
        assert!(prediction.score > 0.5);
    }

    #[test]
    fn neutral_text_scores_half() {
        let model = LexiconModel::new();
        let prediction = model.score("the package arrived on a tuesday");

        assert_eq!(prediction.label, POSITIVE_LABEL);
        assert_eq!(prediction.score, 0.5);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let model = LexiconModel::new();
        for text in [
            "",
            "love love love love love",
            "hate hate hate hate hate",
            "love hate love hate",
            "Great product, awful delivery",
        ] {
            let prediction = model.score(text);
            assert!((0.0..=1.0).contains(&prediction.score), "text: {:?}", text);
        }
    }

    #[test]
    fn punctuation_does_not_hide_polar_words() {
        let model = LexiconModel::new();
        let prediction = model.score("Love it! Absolutely love it.");

        assert_eq!(prediction.label, POSITIVE_LABEL);
        assert!(prediction.score > 0.5);
    }

    #[tokio::test]
    async fn classify_reports_upper_case_labels() {
        let model = LexiconModel::new();
        let prediction = model.classify("I love this product").await.unwrap();

        assert_eq!(prediction.label, "POSITIVE");
        assert!(prediction.score > 0.5);
    }
}
