use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::models::{Reading, ReadingDocument, StoredReading};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOptions},
    Client, Collection,
};
use std::sync::Arc;

/// Persistence for readings. Implementations must return `find_recent`
/// results newest first by `recorded_at`.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Writes one reading and returns the id the store assigned to it.
    async fn insert(&self, reading: &Reading) -> Result<String, StoreError>;

    async fn find_recent(&self, limit: i64) -> Result<Vec<StoredReading>, StoreError>;
}

pub type SharedStore = Arc<dyn ReadingStore>;

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<ReadingDocument>,
}

impl MongoStore {
    pub async fn connect(config: &StoreConfig) -> mongodb::error::Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        // A Client is needed to connect to MongoDB, it connects lazily
        let client = Client::with_options(options)?;
        let collection = client
            .database(&config.database)
            .collection::<ReadingDocument>(&config.collection);

        Ok(MongoStore { client, collection })
    }

    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ReadingStore for MongoStore {
    async fn insert(&self, reading: &Reading) -> Result<String, StoreError> {
        let res = self
            .collection
            .insert_one(ReadingDocument::from(reading), None)
            .await?;

        let id = match res.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => res.inserted_id.to_string(),
        };
        Ok(id)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<StoredReading>, StoreError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .build();

        let readings = self
            .collection
            .find(None, find_options)
            .await?
            .try_collect::<Vec<_>>()
            .await?
            .into_iter()
            .map(ReadingDocument::into_stored)
            .collect::<Vec<_>>();

        Ok(readings)
    }
}
