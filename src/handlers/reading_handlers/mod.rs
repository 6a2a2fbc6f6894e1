pub mod ingest;
pub mod recent;

/// Upper bound of readings returned by `GET /api/datos`.
pub const RECENT_READINGS_LIMIT: i64 = 50;

pub const SAVED_MESSAGE: &str = "Datos guardados correctamente";
