use crate::pipeline::types::{ActionCategory, GameKey, Transition};
use serde::Serialize;

pub const IDLE_LABEL: &str = "Idle (Middle Lane)";
const INITIAL_LABEL: &str = "Idle";

/// What the injector and the overlay should do for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    pub tap: Option<GameKey>,
    pub status: String,
}

/// Maps transitions to key taps and keeps the status label shown to the user.
///
/// Only rising edges tap. A falling edge leaves the previous label in place
/// until the next frame relabels it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    status: String,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            status: INITIAL_LABEL.to_string(),
        }
    }

    pub fn dispatch(&mut self, transition: Transition) -> Dispatch {
        let tap = match transition {
            Transition::RisingEdge(category) => {
                self.status = press_label(category).to_string();
                Some(key_for(category))
            }
            Transition::FallingEdge(_) => None,
            Transition::Held(category) => {
                self.status = held_label(category);
                None
            }
            Transition::Idle => {
                self.status = IDLE_LABEL.to_string();
                None
            }
        };

        Dispatch {
            tap,
            status: self.status.clone(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

pub fn key_for(category: ActionCategory) -> GameKey {
    match category {
        ActionCategory::MoveRight => GameKey::Right,
        ActionCategory::MoveLeft => GameKey::Left,
        ActionCategory::Jump => GameKey::Up,
        ActionCategory::Duck => GameKey::Down,
    }
}

fn press_label(category: ActionCategory) -> &'static str {
    match category {
        ActionCategory::MoveRight => "Move RIGHT (Press)",
        ActionCategory::MoveLeft => "Move LEFT (Press)",
        ActionCategory::Jump => "JUMP (Press)",
        ActionCategory::Duck => "DUCK (Press)",
    }
}

fn held_label(category: ActionCategory) -> String {
    format!(
        "{} (Held)",
        category.as_str().to_uppercase().replace('_', " ")
    )
}
