use crate::errors::ReadingError;
use crate::utils::coercion::{coerce_f64, coerce_i64, coerce_string};
use crate::utils::time::to_iso_string;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body of `POST /api/data` before validation. A key that is present maps to
/// `Some`, even when its value is `null`.
#[derive(Debug, Default, Deserialize)]
pub struct ReadingPayload {
    #[serde(rename = "dispositivo", default, deserialize_with = "present")]
    pub device: Option<Value>,
    #[serde(rename = "temperatura", default, deserialize_with = "present")]
    pub temperature: Option<Value>,
    #[serde(rename = "humedad", default, deserialize_with = "present")]
    pub humidity: Option<Value>,
    #[serde(rename = "luz", default, deserialize_with = "present")]
    pub light_level: Option<Value>,
    #[serde(rename = "intensidad_luz", default, deserialize_with = "present")]
    pub light_intensity: Option<Value>,
    #[serde(rename = "movimiento", default, deserialize_with = "present")]
    pub motion: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ReadingPayload {
    /// Anything other than a JSON object carries none of the required keys.
    pub fn from_json(body: Value) -> Result<Self, ReadingError> {
        match body {
            Value::Object(map) => Self::from_map(map),
            _ => Err(ReadingError::MissingFields),
        }
    }

    fn from_map(map: Map<String, Value>) -> Result<Self, ReadingError> {
        serde_json::from_value(Value::Object(map)).map_err(|_| ReadingError::MissingFields)
    }

    /// Checks run in a fixed order and the first failure wins: required keys,
    /// then temperature/humidity, then `luz`.
    pub fn validate(self, recorded_at: DateTime<Utc>) -> Result<Reading, ReadingError> {
        let (Some(device), Some(temperature), Some(humidity)) =
            (self.device, self.temperature, self.humidity)
        else {
            return Err(ReadingError::MissingFields);
        };

        let device = coerce_string(&device);
        if device.trim().is_empty() {
            return Err(ReadingError::MissingFields);
        }

        let (Some(temperature), Some(humidity)) = (coerce_f64(&temperature), coerce_f64(&humidity))
        else {
            return Err(ReadingError::InvalidNumeric);
        };

        let light_level = match self.light_level {
            Some(value) => Some(coerce_i64(&value).ok_or(ReadingError::InvalidLight)?),
            None => None,
        };

        Ok(Reading {
            device,
            temperature,
            humidity,
            light_level,
            light_intensity: self.light_intensity.as_ref().map(coerce_string),
            motion: self.motion.as_ref().map(coerce_string),
            recorded_at,
        })
    }
}

/// A validated sensor reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub device: String,
    pub temperature: f64,
    pub humidity: f64,
    pub light_level: Option<i64>,
    pub light_intensity: Option<String>,
    pub motion: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// A reading as returned by the store, with its store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReading {
    pub id: String,
    pub reading: Reading,
}

/// Shape of a reading inside the `Datos` collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReadingDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "dispositivo")]
    pub device: String,
    #[serde(rename = "temperatura")]
    pub temperature: f64,
    #[serde(rename = "humedad")]
    pub humidity: f64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "luz", default, skip_serializing_if = "Option::is_none")]
    pub light_level: Option<i64>,
    #[serde(rename = "intensidad_luz", default, skip_serializing_if = "Option::is_none")]
    pub light_intensity: Option<String>,
    #[serde(rename = "movimiento", default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
}

impl From<&Reading> for ReadingDocument {
    fn from(reading: &Reading) -> Self {
        ReadingDocument {
            id: None,
            device: reading.device.clone(),
            temperature: reading.temperature,
            humidity: reading.humidity,
            timestamp: reading.recorded_at,
            light_level: reading.light_level,
            light_intensity: reading.light_intensity.clone(),
            motion: reading.motion.clone(),
        }
    }
}

impl ReadingDocument {
    pub fn into_stored(self) -> StoredReading {
        StoredReading {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            reading: Reading {
                device: self.device,
                temperature: self.temperature,
                humidity: self.humidity,
                light_level: self.light_level,
                light_intensity: self.light_intensity,
                motion: self.motion,
                recorded_at: self.timestamp,
            },
        }
    }
}

/// Item of the `GET /api/datos` response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecentReading {
    #[serde(rename = "_id")]
    #[schema(example = "665f1c2e9b1e8a3d4c2b1a00")]
    pub id: String,
    #[schema(example = "esp32-1")]
    pub dispositivo: String,
    #[schema(example = 23.5)]
    pub temperatura: f64,
    #[schema(example = 60.2)]
    pub humedad: f64,
    #[schema(example = "2024-05-01T06:30:45.123000")]
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub luz: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensidad_luz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movimiento: Option<String>,
}

impl From<StoredReading> for RecentReading {
    fn from(stored: StoredReading) -> Self {
        let reading = stored.reading;
        RecentReading {
            id: stored.id,
            timestamp: to_iso_string(&reading.recorded_at),
            dispositivo: reading.device,
            temperatura: reading.temperature,
            humedad: reading.humidity,
            luz: reading.light_level,
            intensidad_luz: reading.light_intensity,
            movimiento: reading.motion,
        }
    }
}
