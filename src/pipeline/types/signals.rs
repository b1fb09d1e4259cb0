use serde::{Deserialize, Serialize};

/// Gesture categories tracked by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCategory {
    MoveLeft,
    MoveRight,
    Jump,
    Duck,
}

impl ActionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::Jump => "jump",
            Self::Duck => "duck",
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::MoveLeft => 0,
            Self::MoveRight => 1,
            Self::Jump => 2,
            Self::Duck => 3,
        }
    }
}

/// Gestures detected in the current frame. Lane flags and shape flags are
/// independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RawSignalSet {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub duck: bool,
}

impl RawSignalSet {
    /// No hand, no gesture.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ActionCategory) -> bool {
        match category {
            ActionCategory::MoveLeft => self.move_left,
            ActionCategory::MoveRight => self.move_right,
            ActionCategory::Jump => self.jump,
            ActionCategory::Duck => self.duck,
        }
    }
}
