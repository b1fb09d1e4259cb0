use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Frame Error: {0}")]
    Frame(#[from] FrameError),
    #[error("Injector Error: {0}")]
    Injector(#[from] InjectorError),
    #[error("Pipeline Error: {0}")]
    Pipeline(String),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// Landmark intake errors. A malformed observation is a broken provider
// contract, never a "no hand" frame.
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to read observation: {0}")]
    Read(std::io::Error),
    #[error("Malformed observation on line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Observation on line {line} is not valid UTF-8: {source}")]
    InvalidEncoding {
        line: usize,
        source: std::str::Utf8Error,
    },
    #[error("Invalid landmark count on line {line}: expected 21, got {count}")]
    InvalidHand { line: usize, count: usize },
}

impl FrameError {
    /// Whether the stream can continue past this error. Bad records can be
    /// dropped; a failed read cannot.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Read(_))
    }
}

#[derive(Error, Debug)]
pub enum InjectorError {
    #[error("Failed to send tap: {0}")]
    Send(String),
    #[error("Failed to write tap: {0}")]
    Write(#[from] std::io::Error),
    #[error("Failed to encode tap: {0}")]
    Encode(#[from] serde_json::Error),
}
