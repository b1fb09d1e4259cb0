use crate::error::AppError;
use crate::pipeline::orchestration::{FrameContext, ProcessingStep};
use crate::pipeline::services::ActionScheduler;

/// Runs the debounce state machine. This step is the sole owner of the
/// held-gesture state.
#[derive(Debug, Default)]
pub struct SchedulingStep {
    scheduler: ActionScheduler,
}

impl SchedulingStep {
    pub fn new(scheduler: ActionScheduler) -> Self {
        Self { scheduler }
    }
}

impl ProcessingStep for SchedulingStep {
    fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let signals = context.signals.as_ref().ok_or_else(|| {
            AppError::Pipeline("No signals available for scheduling".to_string())
        })?;

        context.transition = Some(self.scheduler.step(signals));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SchedulingStep"
    }
}
