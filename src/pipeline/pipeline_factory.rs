use crate::pipeline::orchestration::ProcessingPipeline;
use crate::pipeline::services::{ActionScheduler, Dispatcher};
use crate::pipeline::steps::{ClassificationStep, DispatchStep, ResolutionStep, SchedulingStep};

pub struct PipelineFactory;

impl PipelineFactory {
    /// classify -> resolve -> schedule -> dispatch, with fresh state.
    pub fn gesture_pipeline() -> ProcessingPipeline {
        ProcessingPipeline::new()
            .add_step(Box::new(ClassificationStep::new()))
            .add_step(Box::new(ResolutionStep::new()))
            .add_step(Box::new(SchedulingStep::new(ActionScheduler::new())))
            .add_step(Box::new(DispatchStep::new(Dispatcher::new())))
    }
}
