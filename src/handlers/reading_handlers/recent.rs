use super::RECENT_READINGS_LIMIT;
use crate::errors::{AppError, ReadingError};
use crate::handlers::ApiContext;
use crate::models::RecentReading;
use crate::utils::utils_models::ErrorMessage;

#[utoipa::path(
        get,
        path = "/api/datos",
        responses(
            (status = 200, description = "Up to 50 readings, newest first", body = [RecentReading]),
            (status = 500, description = "Readings could not be queried", body = ErrorMessage),
        )
    )
]
pub async fn recent_readings_handler(ctx: ApiContext) -> Result<impl warp::Reply, warp::Rejection> {
    let readings = ctx
        .store
        .find_recent(RECENT_READINGS_LIMIT)
        .await
        .map_err(|err| {
            log::error!("Error querying recent readings: {}", err);
            warp::reject::custom(AppError::from(ReadingError::QueryFailure(err)))
        })?;

    let res = readings
        .into_iter()
        .map(RecentReading::from)
        .collect::<Vec<_>>();

    log::debug!("Serving {} recent readings", res.len());
    Ok(warp::reply::json(&res))
}
