//! Current position endpoint (`iss-now.json`).

use chrono::{DateTime, Utc};
use serde_derive::Deserialize;

use crate::error::Error;

pub(crate) const PATH: &str = "iss-now.json";

/// Where the station was at `timestamp`.
#[derive(Debug, Clone)]
pub struct IssPosition {
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Deserialize, Debug)]
struct PositionResponse {
    #[serde(with = "chrono::serde::ts_seconds")]
    timestamp: DateTime<Utc>,
    iss_position: RawCoordinates,
}

// The API encodes coordinates as decimal strings.
#[derive(Deserialize, Debug)]
struct RawCoordinates {
    latitude: String,
    longitude: String,
}

pub(crate) fn parse_position(body: &str) -> Result<IssPosition, Error> {
    let response: PositionResponse =
        serde_json::from_str(body).map_err(|e| Error::format(format!("position: {e}")))?;

    let latitude = parse_angle(&response.iss_position.latitude, "latitude", 90.0)?;
    let longitude = parse_angle(&response.iss_position.longitude, "longitude", 180.0)?;

    Ok(IssPosition {
        timestamp: response.timestamp,
        latitude,
        longitude,
    })
}

fn parse_angle(value: &str, field: &str, bound: f64) -> Result<f64, Error> {
    let deg: f64 = value
        .parse()
        .map_err(|_| Error::format(format!("non-numeric {field} {value:?}")))?;
    if !(-bound..=bound).contains(&deg) {
        return Err(Error::format(format!("{field} {deg} out of range")));
    }
    Ok(deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITION: &str = r#"{
        "message": "success",
        "timestamp": 1700000000,
        "iss_position": {"latitude": "51.5000", "longitude": "-0.1200"}
    }"#;

    #[test]
    fn coordinates_parse_to_floats() {
        let position = parse_position(POSITION).unwrap();
        assert_eq!(position.latitude, 51.5);
        assert_eq!(position.longitude, -0.12);
        assert_eq!(position.timestamp.timestamp(), 1_700_000_000);
    }

    #[test]
    fn non_numeric_latitude_is_a_format_error() {
        let body = r#"{
            "timestamp": 0,
            "iss_position": {"latitude": "north", "longitude": "0.0"}
        }"#;
        match parse_position(body) {
            Err(Error::Format { message }) => assert!(message.contains("latitude")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_longitude_is_a_format_error() {
        let body = r#"{
            "timestamp": 0,
            "iss_position": {"latitude": "0.0", "longitude": "360.0"}
        }"#;
        match parse_position(body) {
            Err(Error::Format { message }) => assert!(message.contains("longitude")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn missing_position_object_is_a_format_error() {
        assert!(matches!(
            parse_position(r#"{"timestamp": 0}"#),
            Err(Error::Format { .. })
        ));
    }
}
