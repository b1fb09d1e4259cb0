mod extension;
mod game_key;
mod lane;
mod signals;
mod transition;

pub use extension::{ExtensionVector, Finger};
pub use game_key::GameKey;
pub use lane::{LEFT_LANE_BOUND, LanePosition, RIGHT_LANE_BOUND};
pub use signals::{ActionCategory, RawSignalSet};
pub use transition::Transition;
