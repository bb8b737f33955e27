//! The tracking pipeline: crew roster, current position, world map with the
//! next overhead pass.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, error};
use open_notify_client::{Astronaut, IssPosition, Pass};

use crate::settings::ReferenceConfig;
use crate::ui::CanvasError;

/// Data source of the pipeline. Implemented by the real API client and by
/// the test doubles.
pub trait Fetch {
    fn astronauts(&self) -> Result<Vec<Astronaut>, open_notify_client::Error>;
    fn position(&self) -> Result<IssPosition, open_notify_client::Error>;
    fn next_pass(&self, lat: f64, lon: f64) -> Result<Pass, open_notify_client::Error>;
}

impl Fetch for open_notify_client::Client {
    fn astronauts(&self) -> Result<Vec<Astronaut>, open_notify_client::Error> {
        self.astronauts()
    }

    fn position(&self) -> Result<IssPosition, open_notify_client::Error> {
        self.position()
    }

    fn next_pass(&self, lat: f64, lon: f64) -> Result<Pass, open_notify_client::Error> {
        self.next_pass(lat, lon)
    }
}

/// Map canvas operations the pipeline needs. The terminal implementation is
/// [`crate::ui::MapCanvas`].
pub trait Canvas {
    fn mark_pass(&mut self, lat: f64, lon: f64, label: &str) -> Result<(), CanvasError>;
    fn wait_for_exit(self) -> Result<(), CanvasError>;
}

/// Failure inside the map stage, either from the pass request or from the
/// canvas itself.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error(transparent)]
    Fetch(#[from] open_notify_client::Error),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Renders a UTC time the way `ctime` does, e.g. `Thu Jan  1 00:00:00 1970`.
pub fn ctime(time: &DateTime<Utc>) -> String {
    time.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// Runs the pipeline: print the crew roster, print the current position,
/// then put everything on the map canvas and wait for the exit click.
///
/// Failures of the first two requests abort the run. Any failure in the map
/// stage is reported as a single `ERROR:` line instead; if the canvas came up
/// before the failure it stays on screen until the user dismisses it.
pub fn run<F, C, O, W>(
    fetcher: &F,
    open_canvas: O,
    reference: &ReferenceConfig,
    out: &mut W,
) -> Result<()>
where
    F: Fetch,
    C: Canvas,
    O: FnOnce(f64, f64) -> Result<C, CanvasError>,
    W: Write,
{
    debug!("requesting the astronaut roster");
    let astronauts = fetcher.astronauts()?;
    writeln!(out, "Current astronauts in space: {}", astronauts.len())?;
    for astronaut in &astronauts {
        writeln!(out, "* {} in {}", astronaut.name, astronaut.craft)?;
    }

    debug!("requesting the current position");
    let position = fetcher.position()?;
    writeln!(
        out,
        "Current ISS coordinates: lat={:.2} lon={:.2}",
        position.latitude, position.longitude
    )?;
    writeln!(out, "Current ISS timestamp: {}", ctime(&position.timestamp))?;

    match open_canvas(position.latitude, position.longitude) {
        Ok(mut canvas) => {
            match show_next_pass(fetcher, &mut canvas, reference) {
                Ok(rise_time) => writeln!(
                    out,
                    "Next time ISS will pass over {}: {}",
                    reference.name, rise_time
                )?,
                Err(err) => {
                    error!("problem loading: {err}");
                    writeln!(out, "ERROR: problem loading: {err}")?;
                }
            }
            writeln!(out, "Click on the screen to exit")?;
            canvas.wait_for_exit()?;
        }
        Err(err) => {
            error!("problem loading: {err}");
            writeln!(out, "ERROR: problem loading: {err}")?;
        }
    }

    Ok(())
}

/// Pass half of the map stage: request the prediction for the reference
/// location, mark it on the canvas and hand back the formatted rise time.
fn show_next_pass<F: Fetch, C: Canvas>(
    fetcher: &F,
    canvas: &mut C,
    reference: &ReferenceConfig,
) -> Result<String, MapError> {
    debug!(
        "requesting the next pass over {} ({:.4}/{:.4})",
        reference.name, reference.lat, reference.lon
    );
    let pass = fetcher.next_pass(reference.lat, reference.lon)?;

    let rise_time = ctime(&pass.rise_time);
    canvas.mark_pass(reference.lat, reference.lon, &rise_time)?;

    Ok(rise_time)
}
