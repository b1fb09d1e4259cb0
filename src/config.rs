use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;

const CONFIG_FILE: &str = "gesture-lanes";
const ENV_PREFIX: &str = "GESTURE_LANES";

/// Where taps are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectorKind {
    /// Log taps only.
    Log,
    /// Write taps as JSON lines on stdout for an external injector.
    Stdout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    /// JSON-lines landmark stream; stdin when unset.
    #[serde(default)]
    pub input: Option<PathBuf>,
    pub frame_buffer_size: usize,
    pub injector: InjectorKind,
    pub log_level: String,
    pub skip_malformed_frames: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            input: None,
            frame_buffer_size: 60,
            injector: InjectorKind::Log,
            log_level: "info".to_string(),
            skip_malformed_frames: true,
        }
    }
}

impl Configuration {
    /// Defaults, then `gesture-lanes.{toml,json,yaml}` if present, then
    /// `GESTURE_LANES_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("frame_buffer_size", defaults.frame_buffer_size as i64)?
            .set_default("injector", "log")?
            .set_default("log_level", defaults.log_level)?
            .set_default("skip_malformed_frames", defaults.skip_malformed_frames)?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let configuration: Self = settings.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "Frame buffer size must be greater than 0".to_string(),
            ));
        }

        if Level::from_str(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }
}
