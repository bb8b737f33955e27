//! World map canvas on the terminal.
//!
//! The whole terminal is the drawing surface. World coordinates span
//! longitude [-180, 180] on x and latitude [-90, 90] on y, so every drawing
//! call takes its point as (lon, lat). [`world_point`] is the only place
//! where the geographic (lat, lon) order is flipped.

use std::io;
use std::sync::mpsc::{Receiver, SyncSender};
use std::thread;

use chrono::{DateTime, Utc};
use circular_queue::CircularQueue;
use log::Level;
use termion::input::{MouseTerminal, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};
use tui::backend::TermionBackend;
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Style};
use tui::text::{Span, Spans};
use tui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;
use unicode_width::UnicodeWidthStr;

use crate::app;
use crate::event::Event;
use crate::widgets::StatusBar;

const WORLD_LON: [f64; 2] = [-180.0, 180.0];
const WORLD_LAT: [f64; 2] = [-90.0, 90.0];

const COL_MAP: Color = Color::DarkGray;
const COL_STATION: Color = Color::LightRed;
const COL_PASS: Color = Color::Yellow;

const LOG_PANE_HEIGHT: u16 = 10;

type Backend = TermionBackend<MouseTerminal<RawTerminal<io::Stdout>>>;

/// Rendering failures around the terminal canvas.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("not attached to a terminal")]
    NotATty,
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

struct PassMarker {
    lat: f64,
    lon: f64,
    label: String,
}

/// The live map canvas. Only one exists per run; the terminal is restored
/// when it goes out of scope.
pub struct MapCanvas {
    events: Receiver<Event>,
    logs: CircularQueue<(DateTime<Utc>, Level, String)>,
    pass: Option<PassMarker>,
    show_logs: bool,
    station: (f64, f64),
    terminal: Terminal<Backend>,
}

impl MapCanvas {
    /// Takes over the terminal and draws the world map with the station
    /// marker at the given coordinates.
    pub fn open(
        lat: f64,
        lon: f64,
        sender: SyncSender<Event>,
        events: Receiver<Event>,
        show_logs: bool,
    ) -> Result<Self, CanvasError> {
        if !termion::is_tty(&io::stdout()) {
            return Err(CanvasError::NotATty);
        }

        let stdout = MouseTerminal::from(io::stdout().into_raw_mode()?);
        let mut terminal = Terminal::new(TermionBackend::new(stdout))?;

        let resize_sender = sender.clone();
        let signals = signal_hook::iterator::Signals::new(&[libc::SIGWINCH])?;
        thread::spawn(move || {
            for _ in &signals {
                if resize_sender.send(Event::Resize).is_err() {
                    break;
                }
            }
        });

        thread::spawn(move || {
            for event in io::stdin().events() {
                if let Ok(event) = event {
                    if sender.send(Event::Input(event)).is_err() {
                        break;
                    }
                }
            }
        });

        terminal.clear()?;
        terminal.hide_cursor()?;

        let mut canvas = MapCanvas {
            events,
            logs: CircularQueue::with_capacity(100),
            pass: None,
            show_logs,
            station: (lat, lon),
            terminal,
        };
        canvas.draw()?;

        Ok(canvas)
    }

    fn draw(&mut self) -> Result<(), CanvasError> {
        let station = self.station;
        let pass = &self.pass;
        let logs = &self.logs;
        let show_logs = self.show_logs;

        self.terminal.draw(|f| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                .split(f.size());
            let map_area = rows[0];

            let map = Canvas::default()
                .paint(|ctx| {
                    ctx.draw(&Map {
                        color: COL_MAP,
                        resolution: MapResolution::High,
                    });

                    let (x, y) = world_point(station.0, station.1);
                    ctx.print(
                        x,
                        y,
                        Spans::from(Span::styled("■─ISS", Style::default().fg(COL_STATION))),
                    );

                    if let Some(marker) = pass {
                        let (x, y) = world_point(marker.lat, marker.lon);
                        ctx.layer();
                        ctx.draw(&Points {
                            coords: &[(x, y)],
                            color: COL_PASS,
                        });

                        let label_x = centered_label_x(x, marker.label.width(), map_area.width);
                        let label_y = (y - row_height(map_area.height)).max(WORLD_LAT[0]);
                        ctx.print(
                            label_x,
                            label_y,
                            Spans::from(Span::styled(
                                marker.label.clone(),
                                Style::default().fg(COL_PASS),
                            )),
                        );
                    }
                })
                .x_bounds(WORLD_LON)
                .y_bounds(WORLD_LAT);
            f.render_widget(map, map_area);

            let rise_time = pass.as_ref().map(|marker| marker.label.as_str());
            f.render_widget(StatusBar::new(rise_time), rows[1]);

            if show_logs {
                let log_area = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints(
                        [Constraint::Min(0), Constraint::Length(LOG_PANE_HEIGHT)].as_ref(),
                    )
                    .split(map_area)[1];

                let mut lines: Vec<Spans> = logs
                    .iter()
                    .take(usize::from(LOG_PANE_HEIGHT - 1))
                    .map(|(time, level, message)| {
                        let level_style = match level {
                            Level::Error => Style::default().fg(Color::Red),
                            Level::Warn => Style::default().fg(Color::Yellow),
                            _ => Style::default(),
                        };
                        Spans::from(vec![
                            Span::raw(time.format("%T ").to_string()),
                            Span::styled(format!("{level:<5} "), level_style),
                            Span::raw(message.clone()),
                        ])
                    })
                    .collect();
                lines.reverse();

                let pane = Paragraph::new(lines).block(
                    Block::default()
                        .borders(Borders::TOP)
                        .title(Span::styled("Log", Style::default().fg(Color::Yellow))),
                );
                f.render_widget(pane, log_area);
            }
        })?;

        Ok(())
    }

    /// Returns true when the event dismisses the canvas: any mouse click,
    /// `q` or Ctrl-C. `l` toggles the log pane.
    fn handle_input(&mut self, event: &termion::event::Event) -> bool {
        use termion::event::Event::*;
        use termion::event::Key::*;
        use termion::event::{MouseButton, MouseEvent};

        match *event {
            Mouse(MouseEvent::Press(button, ..)) => {
                !matches!(button, MouseButton::WheelUp | MouseButton::WheelDown)
            }
            Key(Char('q')) | Key(Ctrl('c')) => true,
            Key(Char('l')) => {
                self.show_logs = !self.show_logs;
                false
            }
            _ => false,
        }
    }
}

impl app::Canvas for MapCanvas {
    /// Drops a yellow dot at the pass location with the rise time written
    /// centered beneath it.
    fn mark_pass(&mut self, lat: f64, lon: f64, label: &str) -> Result<(), CanvasError> {
        self.pass = Some(PassMarker {
            lat,
            lon,
            label: label.to_string(),
        });
        self.draw()
    }

    /// Keeps the map on screen until the user dismisses it.
    fn wait_for_exit(mut self) -> Result<(), CanvasError> {
        self.draw()?;

        while let Ok(event) = self.events.recv() {
            match event {
                Event::Input(input) => {
                    if self.handle_input(&input) {
                        break;
                    }
                }
                Event::Log((level, message)) => {
                    self.logs.push((Utc::now(), level, message));
                }
                Event::Resize => {}
            }
            self.draw()?;
        }

        self.terminal.show_cursor()?;
        Ok(())
    }
}

/// Geographic convention orders coordinates (lat, lon), the canvas wants
/// (x, y) = (lon, lat).
fn world_point(lat: f64, lon: f64) -> (f64, f64) {
    (lon, lat)
}

/// World space x that left aligns a label of `width` cells so its middle
/// lands on `x`. Clamped at the west edge, labels anchored outside the world
/// are never drawn.
fn centered_label_x(x: f64, width: usize, area_width: u16) -> f64 {
    if area_width == 0 {
        return x;
    }

    let per_cell = (WORLD_LON[1] - WORLD_LON[0]) / f64::from(area_width);
    (x - per_cell * width as f64 / 2.0).max(WORLD_LON[0])
}

/// World space height of one character row.
fn row_height(area_height: u16) -> f64 {
    if area_height == 0 {
        return 0.0;
    }

    (WORLD_LAT[1] - WORLD_LAT[0]) / f64::from(area_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_maps_to_canvas_origin() {
        assert_eq!(world_point(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn drawing_order_is_lon_then_lat() {
        // Top left corner of the world.
        assert_eq!(world_point(90.0, -180.0), (-180.0, 90.0));
        assert_eq!(world_point(51.5, -0.12), (-0.12, 51.5));
    }

    #[test]
    fn labels_center_on_their_anchor() {
        // 72 columns over 360 degrees: 5 degrees per cell, 10 cells wide
        // puts the left edge 25 degrees west of the anchor.
        assert_eq!(centered_label_x(0.0, 10, 72), -25.0);
    }

    #[test]
    fn labels_stay_inside_the_west_edge() {
        assert_eq!(centered_label_x(-179.0, 10, 72), -180.0);
    }

    #[test]
    fn degenerate_areas_leave_the_anchor_alone() {
        assert_eq!(centered_label_x(10.0, 4, 0), 10.0);
        assert_eq!(row_height(0), 0.0);
    }

    #[test]
    fn row_height_follows_the_area() {
        assert_eq!(row_height(90), 2.0);
        assert_eq!(row_height(45), 4.0);
    }
}
