use super::ActionCategory;
use serde::{Deserialize, Serialize};

/// The single outcome of evaluating one frame against the held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Signal went false -> true; the category is now held.
    RisingEdge(ActionCategory),
    /// Signal went true -> false; the category is released.
    FallingEdge(ActionCategory),
    /// No pending edge, but this category is still held.
    Held(ActionCategory),
    /// No pending edge and nothing held.
    Idle,
}
