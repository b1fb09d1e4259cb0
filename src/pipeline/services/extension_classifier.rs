use crate::common::LandmarkFrame;
use crate::pipeline::types::{ExtensionVector, Finger};

/// Decides which fingers are extended from landmark heights alone.
///
/// A finger counts as extended when its tip sits above its reference joint.
/// Image y grows downward, so "above" means a smaller y.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionClassifier;

impl ExtensionClassifier {
    pub fn classify(&self, frame: &LandmarkFrame) -> ExtensionVector {
        let extended = Finger::ALL.map(|finger| {
            frame.get(finger.tip()).y < frame.get(finger.reference_joint()).y
        });
        ExtensionVector::new(extended)
    }
}
