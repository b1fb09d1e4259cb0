use crate::error::AppError;
use crate::pipeline::orchestration::{FrameContext, ProcessingStep};
use crate::pipeline::services::{ExtensionClassifier, LaneClassifier};

/// Classifies finger extension and lane for frames that contain a hand.
#[derive(Debug, Default)]
pub struct ClassificationStep {
    extension_classifier: ExtensionClassifier,
    lane_classifier: LaneClassifier,
}

impl ClassificationStep {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessingStep for ClassificationStep {
    fn process(&mut self, context: &mut FrameContext) -> Result<(), AppError> {
        if let Some(hand) = context.observation.hand() {
            let extension = self.extension_classifier.classify(hand);
            let lane = self.lane_classifier.classify(hand);
            tracing::trace!(?extension, ?lane, "Classified hand");
            context.extension = Some(extension);
            context.lane = Some(lane);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ClassificationStep"
    }
}
