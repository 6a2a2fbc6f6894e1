use super::handlers;
use utoipa::OpenApi;
use warp::Filter;

#[derive(OpenApi)]
#[openapi(
        info(description = "Ingestion and read-back of ESP32 sensor readings"),
        tags(
            (name = "Sensor Api", description = "Readings ingestion and history")
        )
    )]
pub struct SensorDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = SensorDoc::openapi();
    doc.merge(handlers::SensorApi::openapi());
    doc
}

pub fn api_doc_route() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let doc = api_doc();
    warp::path("api-doc.json")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || warp::reply::json(&doc))
}
