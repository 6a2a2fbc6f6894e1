use crate::utils::utils_models::ErrorMessage;
use std::convert::Infallible;
use thiserror::Error;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

/// Why a reading was refused or could not be served.
#[derive(Debug, Error)]
pub enum ReadingError {
    #[error("Faltan campos obligatorios en el JSON")]
    MissingFields,
    #[error("Temperatura o humedad no son valores numéricos válidos")]
    InvalidNumeric,
    #[error("El campo luz debe ser un valor numérico")]
    InvalidLight,
    #[error("Error al guardar en la base de datos")]
    StorageFailure(#[source] StoreError),
    #[error("Error al consultar la base de datos")]
    QueryFailure(#[source] StoreError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    PayloadTooLarge,
    UnsupportedMediaType,
    Internal,
}

impl ErrorType {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::BadRequest => StatusCode::BAD_REQUEST,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorType::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ErrorType::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorType::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub err_type: ErrorType,
    pub message: String,
}

impl AppError {
    pub fn new(message: &str, err_type: ErrorType) -> AppError {
        AppError {
            message: message.to_string(),
            err_type,
        }
    }

    pub fn to_reply(&self) -> warp::reply::WithStatus<warp::reply::Json> {
        let body = ErrorMessage {
            error: self.message.clone(),
        };
        warp::reply::with_status(warp::reply::json(&body), self.err_type.status_code())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.err_type, self.message)
    }
}

impl Reject for AppError {}

impl From<ReadingError> for AppError {
    fn from(err: ReadingError) -> Self {
        let err_type = match err {
            ReadingError::MissingFields
            | ReadingError::InvalidNumeric
            | ReadingError::InvalidLight => ErrorType::BadRequest,
            ReadingError::StorageFailure(_) | ReadingError::QueryFailure(_) => ErrorType::Internal,
        };
        // Display never includes the store cause
        AppError {
            message: err.to_string(),
            err_type,
        }
    }
}

/// Turns every rejection into a JSON `{"error": ...}` body.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let app_err = if let Some(e) = err.find::<AppError>() {
        e.clone()
    } else if err.is_not_found() {
        AppError::new("Ruta no encontrada", ErrorType::NotFound)
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        log::warn!("Rejected body: {}", e);
        AppError::new("El cuerpo de la petición no es un JSON válido", ErrorType::BadRequest)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        AppError::new("El cuerpo de la petición es demasiado grande", ErrorType::PayloadTooLarge)
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        AppError::new("Se esperaba Content-Type application/json", ErrorType::UnsupportedMediaType)
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        AppError::new("Falta la cabecera Content-Length", ErrorType::BadRequest)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        AppError::new("Método no permitido", ErrorType::MethodNotAllowed)
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        AppError::new("Error interno del servidor", ErrorType::Internal)
    };

    Ok(app_err.to_reply())
}
