//! Pass prediction endpoint (`iss-pass.json`).

use chrono::{DateTime, Utc};
use serde_derive::Deserialize;

use crate::error::Error;

pub(crate) const PATH: &str = "iss-pass.json";

/// A predicted overhead pass of the station for the queried location.
#[derive(Debug, Clone)]
pub struct Pass {
    pub rise_time: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
struct PassResponse {
    response: Vec<PassEntry>,
}

#[derive(Deserialize, Debug)]
struct PassEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    risetime: DateTime<Utc>,
}

/// Picks the second predicted pass. The first entry is typically a pass that
/// is imminent or already in progress, so "next" means index 1.
pub(crate) fn parse_next_pass(body: &str) -> Result<Pass, Error> {
    let response: PassResponse =
        serde_json::from_str(body).map_err(|e| Error::format(format!("pass prediction: {e}")))?;

    match response.response.get(1) {
        Some(entry) => Ok(Pass {
            rise_time: entry.risetime,
        }),
        None => Err(Error::format(format!(
            "expected at least 2 pass predictions, got {}",
            response.response.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSES: &str = r#"{
        "message": "success",
        "request": {"latitude": 39.7684, "longitude": -86.1581, "passes": 5},
        "response": [
            {"duration": 600, "risetime": 1700000100},
            {"duration": 540, "risetime": 1700003600}
        ]
    }"#;

    #[test]
    fn second_entry_is_the_next_pass() {
        let pass = parse_next_pass(PASSES).unwrap();
        assert_eq!(pass.rise_time.timestamp(), 1_700_003_600);
    }

    #[test]
    fn single_entry_is_a_format_error() {
        let body = r#"{"response": [{"duration": 600, "risetime": 1700000100}]}"#;
        match parse_next_pass(body) {
            Err(Error::Format { message }) => assert!(message.contains("got 1")),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn empty_response_is_a_format_error() {
        match parse_next_pass(r#"{"response": []}"#) {
            Err(Error::Format { message }) => assert!(message.contains("got 0")),
            other => panic!("expected format error, got {other:?}"),
        }
    }
}
