use super::SAVED_MESSAGE;
use crate::errors::{AppError, ReadingError};
use crate::handlers::ApiContext;
use crate::models::ReadingPayload;
use crate::utils::time::recorded_at_now;
use crate::utils::utils_models::{ErrorMessage, MessageResponse, ReadingRequest};
use serde_json::Value;
use warp::http::StatusCode;

#[utoipa::path(
        post,
        path = "/api/data",
        request_body = ReadingRequest,
        responses(
            (status = 200, description = "Reading stored", body = MessageResponse),
            (status = 400, description = "Missing or non-coercible fields", body = ErrorMessage),
            (status = 500, description = "Reading could not be stored", body = ErrorMessage),
        )
    )
]
pub async fn ingest_reading_handler(
    body: Value,
    ctx: ApiContext,
) -> Result<impl warp::Reply, warp::Rejection> {
    let reading = ReadingPayload::from_json(body)
        .and_then(|payload| payload.validate(recorded_at_now(ctx.recorded_at_offset)))
        .map_err(|err| {
            log::warn!("Rejected reading: {}", err);
            warp::reject::custom(AppError::from(err))
        })?;

    let id = ctx.store.insert(&reading).await.map_err(|err| {
        log::error!("Error saving reading from {} to MongoDB: {}", reading.device, err);
        warp::reject::custom(AppError::from(ReadingError::StorageFailure(err)))
    })?;

    log::info!("Stored reading {} from device {}", id, reading.device);

    let res = MessageResponse {
        message: SAVED_MESSAGE.to_string(),
    };
    Ok(warp::reply::with_status(warp::reply::json(&res), StatusCode::OK))
}
