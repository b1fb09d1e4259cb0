use crate::error::AppError;
use crate::pipeline::orchestration::{FrameContext, ProcessingStep};
use crate::pipeline::services::Dispatcher;

/// Turns the frame's transition into an optional tap and the status label.
#[derive(Debug, Default)]
pub struct DispatchStep {
    dispatcher: Dispatcher,
}

impl DispatchStep {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl ProcessingStep for DispatchStep {
    fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let transition = context.transition.ok_or_else(|| {
            AppError::Pipeline("No transition available for dispatch".to_string())
        })?;

        context.dispatch = Some(self.dispatcher.dispatch(transition));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DispatchStep"
    }
}
