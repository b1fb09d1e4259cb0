pub mod frame_context;
pub mod gesture_orchestrator;
pub mod metrics;
pub mod processing_pipeline;
pub mod processing_step;

pub use frame_context::{FrameContext, FrameMetrics};
pub use gesture_orchestrator::{FrameOutcome, GestureOrchestrator};
pub use metrics::{MetricsCollector, MetricsObserver, PerformanceMonitor, PerformanceStats};
pub use processing_pipeline::ProcessingPipeline;
pub use processing_step::ProcessingStep;
