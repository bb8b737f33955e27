mod status_bar;

pub use self::status_bar::StatusBar;
