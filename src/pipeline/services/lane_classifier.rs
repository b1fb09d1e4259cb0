use crate::common::{HandLandmark, LandmarkFrame};
use crate::pipeline::types::LanePosition;

/// Places the hand in a lane using the midpoint of thumb tip and index tip.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneClassifier;

impl LaneClassifier {
    pub fn classify(&self, frame: &LandmarkFrame) -> LanePosition {
        let thumb_tip = frame.get(HandLandmark::ThumbTip);
        let index_tip = frame.get(HandLandmark::IndexTip);
        let center_x = (thumb_tip.x + index_tip.x) / 2.0;
        LanePosition::from_center_x(center_x)
    }
}
