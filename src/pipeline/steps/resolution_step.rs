use crate::error::AppError;
use crate::pipeline::orchestration::{FrameContext, ProcessingStep};
use crate::pipeline::services::GestureResolver;
use crate::pipeline::types::RawSignalSet;

/// Resolves the frame's raw signals. A frame without a classified hand
/// resolves to no signals at all.
#[derive(Debug, Default)]
pub struct ResolutionStep {
    resolver: GestureResolver,
}

impl ResolutionStep {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessingStep for ResolutionStep {
    fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        let signals = match (&context.extension, context.lane) {
            (Some(extension), Some(lane)) => self.resolver.resolve(extension, lane),
            _ => RawSignalSet::none(),
        };
        context.signals = Some(signals);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ResolutionStep"
    }
}
