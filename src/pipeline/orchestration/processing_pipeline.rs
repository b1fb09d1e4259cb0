use crate::error::AppError;
use crate::pipeline::orchestration::frame_context::FrameContext;
use crate::pipeline::orchestration::processing_step::ProcessingStep;
use std::time::Instant;
use tracing::debug;

/// A pipeline that processes frames through a chain of steps
#[derive(Default)]
pub struct ProcessingPipeline {
    steps: Vec<Box<dyn ProcessingStep>>,
}

impl ProcessingPipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn ProcessingStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    pub fn process(&mut self, mut context: FrameContext) -> Result<FrameContext, AppError> {
        for step in &mut self.steps {
            let start = Instant::now();
            step.process(&mut context)?;
            let duration_us = start.elapsed().as_micros() as u64;
            debug!("Completed step '{}' in {}us", step.name(), duration_us);
            context.metrics.record_duration(step.name(), duration_us);
        }
        Ok(context)
    }
}
