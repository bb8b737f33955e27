use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde_derive::Deserialize;

/// Reference location for the overhead pass prediction.
#[derive(Clone, Debug, Deserialize)]
pub struct ReferenceConfig {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UiConfig {
    pub show_logs: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub api_endpoint: String,
    pub log_level: Option<u64>,
    pub reference: ReferenceConfig,
    pub ui: UiConfig,
}

impl Settings {
    /// Loads the settings from the default config file location, if there is
    /// one, on top of the built in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let mut settings = Self::defaults()?;

        if let Some(project_dirs) = ProjectDirs::from("org", "open-notify", "iss-monitor") {
            let config_file = project_dirs.config_dir().join("config.toml");
            let config_file = config_file
                .to_str()
                .ok_or_else(|| ConfigError::Message("Invalid config dir".to_string()))?;
            settings.merge(File::with_name(config_file).required(false))?;
        }

        settings.try_into()
    }

    /// Loads the settings from a specific config file on top of the built in
    /// defaults.
    pub fn from_file(file: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::defaults()?;

        settings.merge(File::with_name(file))?;
        settings.try_into()
    }

    fn defaults() -> Result<Config, ConfigError> {
        let mut settings = Config::new();

        settings.set_default("api_endpoint", "http://api.open-notify.org")?;
        settings.set_default("log_level", 0)?;
        // Indianapolis, IN
        settings.set_default("reference.name", "Indianapolis")?;
        settings.set_default("reference.lat", 39.7684)?;
        settings.set_default("reference.lon", -86.1581)?;
        settings.set_default("ui.show_logs", false)?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deserialize() {
        let settings: Settings = Settings::defaults().unwrap().try_into().unwrap();

        assert_eq!(settings.api_endpoint, "http://api.open-notify.org");
        assert_eq!(settings.reference.name, "Indianapolis");
        assert!((settings.reference.lat - 39.7684).abs() < f64::EPSILON);
        assert!((settings.reference.lon + 86.1581).abs() < f64::EPSILON);
        assert!(!settings.ui.show_logs);
    }
}
