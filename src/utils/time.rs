use chrono::{DateTime, Duration, Utc};

/// Fixed shift applied to the ingestion clock. Stored `timestamp` values are
/// local wall time of the deployment site, six hours behind UTC.
pub const RECORDED_AT_OFFSET_HOURS: i64 = 6;

pub fn recorded_at_now(offset: Duration) -> DateTime<Utc> {
    Utc::now() - offset
}

/// Renders a stored timestamp as ISO-8601 without a zone designator, since
/// the value is already shifted away from UTC. The fraction is always six
/// digits and left out entirely when there are no microseconds.
pub fn to_iso_string(timestamp: &DateTime<Utc>) -> String {
    let format = if timestamp.timestamp_subsec_micros() == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    timestamp.naive_utc().format(format).to_string()
}
