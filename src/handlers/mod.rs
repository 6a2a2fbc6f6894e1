pub mod reading_handlers;

use crate::db::SharedStore;
use chrono::Duration;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
            reading_handlers::ingest::ingest_reading_handler,
            reading_handlers::recent::recent_readings_handler
        )
    )
]
pub struct SensorApi;

/// Everything a request handler needs, cloned into each request.
#[derive(Clone)]
pub struct ApiContext {
    pub store: SharedStore,
    pub recorded_at_offset: Duration,
}

impl ApiContext {
    pub fn new(store: SharedStore, recorded_at_offset: Duration) -> Self {
        ApiContext {
            store,
            recorded_at_offset,
        }
    }
}
