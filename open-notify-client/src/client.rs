use std::time::Duration;

use crate::astronauts::{self, Astronaut};
use crate::error::Error;
use crate::passes::{self, Pass};
use crate::position::{self, IssPosition};

/// HTTP client for the open-notify API.
///
/// Three fixed GET endpoints, queried strictly one at a time. No retries and
/// no configuration beyond the base URL; the request timeout is fixed.
pub struct Client {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Builds a client for the given endpoint, e.g. `http://api.open-notify.org`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Requests the list of astronauts currently in space.
    pub fn astronauts(&self) -> Result<Vec<Astronaut>, Error> {
        let body = self.get(astronauts::PATH, &[])?;
        astronauts::parse_astronauts(&body)
    }

    /// Requests the current geographic coordinates of the station along with
    /// the measurement timestamp.
    pub fn position(&self) -> Result<IssPosition, Error> {
        let body = self.get(position::PATH, &[])?;
        position::parse_position(&body)
    }

    /// Requests the next overhead pass of the station for the given location.
    pub fn next_pass(&self, lat: f64, lon: f64) -> Result<Pass, Error> {
        let query = [("lat", lat.to_string()), ("lon", lon.to_string())];
        let body = self.get(passes::PATH, &query)?;
        passes::parse_next_pass(&body)
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, Error> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}
