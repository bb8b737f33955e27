use std::io;
use std::sync::mpsc::sync_channel;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use open_notify_client::Client;

mod app;
mod event;
mod logger;
mod settings;
mod ui;
mod widgets;

use self::settings::Settings;

/// Tracks the International Space Station: the crew in space, the current
/// position and the next pass over a reference location, plotted on a world
/// map in the terminal.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, max_term_width = 100)]
struct Cli {
    /// Sets the open-notify API endpoint url
    #[arg(short, long = "api", value_name = "URL")]
    api_url: Option<String>,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Sets the reference latitude for the pass prediction
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Sets the reference longitude for the pass prediction
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Names the reference location in the pass summary
    #[arg(long, value_name = "NAME")]
    location: Option<String>,

    /// Sets the level of log verbosity
    #[arg(short, action = ArgAction::Count)]
    verbosity: u8,
}

fn main() -> Result<()> {
    run()
}

fn run() -> Result<()> {
    let settings = settings()?;

    let (sender, receiver) = sync_channel(100);
    log::set_boxed_logger(Box::new(logger::Logger::new(sender.clone())))?;

    let client = Client::new(&settings.api_endpoint)?;

    let show_logs = settings.ui.show_logs;
    let stdout = io::stdout();
    app::run(
        &client,
        move |lat, lon| ui::MapCanvas::open(lat, lon, sender, receiver, show_logs),
        &settings.reference,
        &mut stdout.lock(),
    )
}

/// Generates the internal settings representation of the app. Command line
/// options override the options loaded from config files.
fn settings() -> Result<Settings> {
    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(config_file) => Settings::from_file(&config_file)?,
        None => Settings::new()?,
    };

    let log_level = std::cmp::max(
        u64::from(cli.verbosity),
        settings.log_level.unwrap_or(0),
    );
    log::set_max_level(match log_level {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });

    if let Some(api_url) = cli.api_url {
        settings.api_endpoint = api_url;
    }

    if let Some(lat) = cli.lat {
        settings.reference.lat = lat;
    }

    if let Some(lon) = cli.lon {
        settings.reference.lon = lon;
    }

    if let Some(location) = cli.location {
        settings.reference.name = location;
    }

    if !(-90.0..=90.0).contains(&settings.reference.lat) {
        bail!(
            "reference latitude {} is outside [-90, 90]",
            settings.reference.lat
        );
    }

    if !(-180.0..=180.0).contains(&settings.reference.lon) {
        bail!(
            "reference longitude {} is outside [-180, 180]",
            settings.reference.lon
        );
    }

    Ok(settings)
}
