use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Body returned when a reading is stored
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// Body returned by every failing route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub error: String,
}

// Request body for /api/data, documentation only: the handler accepts any
// JSON object and coerces each field itself
#[allow(unused)]
#[derive(ToSchema)]
pub struct ReadingRequest {
    #[schema(example = "esp32-1")]
    dispositivo: String,
    #[schema(example = "23.5")]
    temperatura: String,
    #[schema(example = "60.2")]
    humedad: String,
    #[schema(example = "100")]
    luz: Option<String>,
    #[schema(example = "alta")]
    intensidad_luz: Option<String>,
    #[schema(example = "si")]
    movimiento: Option<String>,
}
