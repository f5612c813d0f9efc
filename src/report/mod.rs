pub mod charts;

pub use charts::{ChartRenderer, DISTRIBUTION_FILE, TREND_FILE};

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::store::SentimentRecord;

/// Number of records carrying each sentiment label.
pub fn distribution(records: &[SentimentRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.sentiment.clone()).or_insert(0) += 1;
    }
    counts
}

/// Number of records per UTC calendar day, grouped by sentiment label.
/// Days on which a label never occurs are absent rather than zero.
pub fn daily_trend(
    records: &[SentimentRecord],
) -> BTreeMap<String, BTreeMap<NaiveDate, u64>> {
    let mut trend: BTreeMap<String, BTreeMap<NaiveDate, u64>> = BTreeMap::new();
    for record in records {
        let day = record.timestamp.date_naive();
        *trend
            .entry(record.sentiment.clone())
            .or_default()
            .entry(day)
            .or_insert(0) += 1;
    }
    trend
}
