pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod injector;
pub mod intake;
pub mod pipeline;

pub use crate::config::Configuration;
pub use crate::coordinator::{Coordinator, CoordinatorBuilder};
pub use crate::error::{AppError, ConfigError, FrameError, InjectorError};
