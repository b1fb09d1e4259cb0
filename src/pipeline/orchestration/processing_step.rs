use super::frame_context::FrameContext;
use crate::error::AppError;

/// One stage of the per-frame chain. Steps run synchronously and in order;
/// none of them may block.
pub trait ProcessingStep: Send {
    fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError>;
    fn name(&self) -> &'static str;
}
