pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod routes;
pub mod swagger;
pub mod utils;
