use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the left lane on the normalized x axis.
pub const LEFT_LANE_BOUND: f32 = 0.33;
/// Lower bound (exclusive) of the right lane on the normalized x axis.
pub const RIGHT_LANE_BOUND: f32 = 0.63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanePosition {
    Left,
    Center,
    Right,
}

impl LanePosition {
    pub fn from_center_x(center_x: f32) -> Self {
        if center_x > RIGHT_LANE_BOUND {
            Self::Right
        } else if center_x < LEFT_LANE_BOUND {
            Self::Left
        } else {
            Self::Center
        }
    }
}
