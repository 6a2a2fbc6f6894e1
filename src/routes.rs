use super::errors::handle_rejection;
use super::handlers::reading_handlers::{ingest::ingest_reading_handler, recent::recent_readings_handler};
use super::handlers::ApiContext;
use super::swagger::api_doc_route;
use serde::de::DeserializeOwned;
use serde_json::Value;
use warp::{http::Method, Filter};

pub const STATUS_TEXT: &str = "API de sensores con MongoDB funcionando";

/// Largest accepted request body.
pub const MAX_BODY_BYTES: u64 = 1024 * 16;

pub fn all_routes(
    ctx: ApiContext,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    status()
        .or(ingest_route(ctx.clone()))
        .or(recent_route(ctx))
        .or(api_doc_route())
        .recover(handle_rejection)
        .with(with_cors())
        .with(warp::log("sensor_ingest_api::http"))
}

fn status() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::end().and(warp::get()).map(|| STATUS_TEXT)
}

fn ingest_route(
    ctx: ApiContext,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("api" / "data")
        .and(warp::post())
        .and(with_json_body::<Value>())
        .and(with_context(ctx))
        .and_then(ingest_reading_handler)
}

fn recent_route(
    ctx: ApiContext,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("api" / "datos")
        .and(warp::get())
        .and(with_context(ctx))
        .and_then(recent_readings_handler)
}

fn with_json_body<T: DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

fn with_cors() -> warp::filters::cors::Cors {
    warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Content-Type"])
        .allow_methods(&[Method::GET, Method::POST])
        .build()
}

fn with_context(
    ctx: ApiContext,
) -> impl Filter<Extract = (ApiContext,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}
