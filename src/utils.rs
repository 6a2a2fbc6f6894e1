pub mod coercion;
pub mod time;
pub mod utils_models;
