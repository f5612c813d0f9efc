use chrono::{DateTime, Utc};

use sentimeter::store::sqlite::SqliteStore;
use sentimeter::store::{RecordStore, SentimentRecord};

fn record(text: &str, sentiment: &str) -> SentimentRecord {
    SentimentRecord {
        text: text.to_string(),
        sentiment: sentiment.to_string(),
        confidence: 0.87,
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn insert_and_read_back() {
    let store = SqliteStore::in_memory().unwrap();

    store
        .insert(record("great product", "positive"))
        .await
        .unwrap();

    let records = store.find_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text, "great product");
    assert_eq!(records[0].sentiment, "positive");
    assert_eq!(records[0].confidence, 0.87);
}

#[tokio::test]
async fn find_all_preserves_insertion_order() {
    let store = SqliteStore::in_memory().unwrap();

    store.insert(record("first", "positive")).await.unwrap();
    store.insert(record("second", "negative")).await.unwrap();
    store.insert(record("third", "positive")).await.unwrap();

    let texts: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.text)
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[tokio::test]
async fn count_tracks_inserts() {
    let store = SqliteStore::in_memory().unwrap();
    assert_eq!(store.count().await.unwrap(), 0);

    store.insert(record("one", "neutral")).await.unwrap();
    store.insert(record("two", "neutral")).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn empty_store_returns_no_records() {
    let store = SqliteStore::in_memory().unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn timestamps_come_back_in_utc_unchanged() {
    let store = SqliteStore::in_memory().unwrap();
    let when: DateTime<Utc> = "2024-05-01T10:30:00Z".parse().unwrap();

    let mut entry = record("timed", "positive");
    entry.timestamp = when;
    store.insert(entry).await.unwrap();

    let records = store.find_all().await.unwrap();
    assert_eq!(records[0].timestamp, when);
}

#[tokio::test]
async fn creates_the_database_directory_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("records.db");

    let store = SqliteStore::new(&path).unwrap();
    store.insert(record("persisted", "positive")).await.unwrap();

    assert!(path.is_file());
}
