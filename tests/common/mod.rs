#![allow(dead_code)]

use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Duration;
use sensor_ingest_api::db::{ReadingStore, SharedStore};
use sensor_ingest_api::errors::StoreError;
use sensor_ingest_api::handlers::ApiContext;
use sensor_ingest_api::models::{Reading, StoredReading};
use sensor_ingest_api::utils::time::RECORDED_AT_OFFSET_HOURS;
use std::sync::{Arc, Mutex};

/// Keeps readings in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    readings: Mutex<Vec<StoredReading>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.readings.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<StoredReading> {
        self.readings.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn insert(&self, reading: &Reading) -> Result<String, StoreError> {
        let id = ObjectId::new().to_hex();
        self.readings.lock().unwrap().push(StoredReading {
            id: id.clone(),
            reading: reading.clone(),
        });
        Ok(id)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<StoredReading>, StoreError> {
        let readings = self.readings.lock().unwrap();
        // newest insert first on equal timestamps
        let mut recent: Vec<StoredReading> = readings.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.reading.recorded_at.cmp(&a.reading.recorded_at));
        recent.truncate(limit.max(0) as usize);
        Ok(recent)
    }
}

pub struct FailingStore;

#[async_trait]
impl ReadingStore for FailingStore {
    async fn insert(&self, _reading: &Reading) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_recent(&self, _limit: i64) -> Result<Vec<StoredReading>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn context(store: SharedStore) -> ApiContext {
    ApiContext::new(store, Duration::hours(RECORDED_AT_OFFSET_HOURS))
}

pub fn memory_context() -> (Arc<MemoryStore>, ApiContext) {
    let store = Arc::new(MemoryStore::default());
    let ctx = context(store.clone());
    (store, ctx)
}
