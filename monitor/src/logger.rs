use std::sync::mpsc::SyncSender;

use log::{Log, Metadata, Record};

use crate::event::Event;

/// Forwards our own log records to the canvas event channel so they end up
/// in the log pane instead of corrupting the raw mode terminal.
pub struct Logger {
    sender: SyncSender<Event>,
}

impl Logger {
    pub fn new(sender: SyncSender<Event>) -> Self {
        Logger { sender }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("iss")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("{}", record.args());
            // A full channel drops the record instead of blocking the caller.
            let _ = self.sender.try_send(Event::Log((record.level(), message)));
        }
    }

    fn flush(&self) {}
}
