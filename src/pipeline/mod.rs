pub mod orchestration;
pub mod pipeline_factory;
pub mod services;
pub mod steps;
pub mod types;

pub use orchestration::{FrameOutcome, GestureOrchestrator};
pub use pipeline_factory::PipelineFactory;
pub use types::{ActionCategory, GameKey, RawSignalSet, Transition};
