use crate::pipeline::types::{ActionCategory, RawSignalSet, Transition};
use tracing::debug;

/// Order in which categories are checked for a pending edge. The first
/// category with an edge wins the frame; the rest wait.
pub const TRANSITION_PRIORITY: [ActionCategory; 4] = [
    ActionCategory::MoveRight,
    ActionCategory::MoveLeft,
    ActionCategory::Jump,
    ActionCategory::Duck,
];

/// Order in which held categories are scanned for the status label. Differs
/// from [`TRANSITION_PRIORITY`].
pub const HELD_SCAN_ORDER: [ActionCategory; 4] = [
    ActionCategory::MoveLeft,
    ActionCategory::MoveRight,
    ActionCategory::Jump,
    ActionCategory::Duck,
];

/// Per-category "currently held" flags carried across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    held: [bool; 4],
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, category: ActionCategory) -> bool {
        self.held[category.slot()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&held| held)
    }

    /// First held category in [`HELD_SCAN_ORDER`].
    pub fn first_held(&self) -> Option<ActionCategory> {
        HELD_SCAN_ORDER
            .into_iter()
            .find(|&category| self.is_held(category))
    }

    fn set(&mut self, category: ActionCategory, held: bool) {
        self.held[category.slot()] = held;
    }

    #[cfg(test)]
    pub(crate) fn holding(categories: &[ActionCategory]) -> Self {
        let mut state = Self::new();
        for &category in categories {
            state.set(category, true);
        }
        state
    }
}

/// Evaluates one frame: at most one category changes, chosen by
/// [`TRANSITION_PRIORITY`]. Returns the transition and the updated state.
pub fn evaluate(signals: &RawSignalSet, state: ActionState) -> (Transition, ActionState) {
    let mut next = state;

    for category in TRANSITION_PRIORITY {
        let signalled = signals.get(category);
        let held = state.is_held(category);

        if signalled && !held {
            next.set(category, true);
            return (Transition::RisingEdge(category), next);
        }
        if !signalled && held {
            next.set(category, false);
            return (Transition::FallingEdge(category), next);
        }
    }

    match state.first_held() {
        Some(category) => (Transition::Held(category), next),
        None => (Transition::Idle, next),
    }
}

/// Owns the [`ActionState`] for the lifetime of the process. Nothing else
/// writes to it.
#[derive(Debug, Default)]
pub struct ActionScheduler {
    state: ActionState,
}

impl ActionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&mut self, signals: &RawSignalSet) -> Transition {
        let (transition, next) = evaluate(signals, self.state);
        if next != self.state {
            debug!(?transition, "Action state updated: {:?}", next);
        }
        self.state = next;
        transition
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActionCategory::*;
    use Transition::{FallingEdge, RisingEdge};

    fn signals(categories: &[ActionCategory]) -> RawSignalSet {
        let mut signals = RawSignalSet::none();
        for category in categories {
            match category {
                MoveLeft => signals.move_left = true,
                MoveRight => signals.move_right = true,
                Jump => signals.jump = true,
                Duck => signals.duck = true,
            }
        }
        signals
    }

    #[test]
    fn starts_idle() {
        let mut scheduler = ActionScheduler::new();
        assert!(!scheduler.state().any_held());
        assert_eq!(scheduler.step(&RawSignalSet::none()), Transition::Idle);
    }

    #[test]
    fn move_right_outranks_simultaneous_jump() {
        let (transition, state) = evaluate(&signals(&[MoveRight, Jump]), ActionState::new());
        assert_eq!(transition, RisingEdge(MoveRight));
        assert!(state.is_held(MoveRight));
        assert!(!state.is_held(Jump));
    }

    #[test]
    fn delayed_edge_fires_on_a_later_frame() {
        let mut scheduler = ActionScheduler::new();
        let both = signals(&[MoveRight, Jump]);
        assert_eq!(scheduler.step(&both), RisingEdge(MoveRight));
        assert_eq!(scheduler.step(&both), RisingEdge(Jump));
        assert_eq!(scheduler.step(&both), Transition::Held(MoveRight));
    }

    #[test]
    fn falling_edge_wins_over_lower_priority_rising_edge() {
        let state = ActionState::holding(&[MoveLeft]);
        let (transition, state) = evaluate(&signals(&[Duck]), state);
        assert_eq!(transition, FallingEdge(MoveLeft));
        assert!(!state.is_held(MoveLeft));
        assert!(!state.is_held(Duck));

        let (transition, state) = evaluate(&signals(&[Duck]), state);
        assert_eq!(transition, RisingEdge(Duck));
        assert!(state.is_held(Duck));
    }

    #[test]
    fn release_clears_then_idles() {
        let mut state = ActionState::holding(&[MoveLeft]);
        let (transition, next) = evaluate(&RawSignalSet::none(), state);
        assert_eq!(transition, FallingEdge(MoveLeft));
        state = next;

        for _ in 0..3 {
            let (transition, next) = evaluate(&RawSignalSet::none(), state);
            assert_eq!(transition, Transition::Idle);
            state = next;
        }
    }

    #[test]
    fn held_label_scans_move_left_before_move_right() {
        let state = ActionState::holding(&[MoveRight, MoveLeft]);
        let (transition, next) = evaluate(&signals(&[MoveRight, MoveLeft]), state);
        assert_eq!(transition, Transition::Held(MoveLeft));
        assert_eq!(next, state);
    }

    #[test]
    fn held_label_falls_back_to_shape_categories() {
        let state = ActionState::holding(&[Duck, Jump]);
        let (transition, _) = evaluate(&signals(&[Duck, Jump]), state);
        assert_eq!(transition, Transition::Held(Jump));
    }

    #[test]
    fn at_most_one_flag_changes_per_frame() {
        let categories = [MoveLeft, MoveRight, Jump, Duck];
        for state_bits in 0u8..16 {
            for signal_bits in 0u8..16 {
                let held: Vec<_> = categories
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| state_bits & (1 << *i) != 0)
                    .map(|(_, c)| *c)
                    .collect();
                let raised: Vec<_> = categories
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| signal_bits & (1 << *i) != 0)
                    .map(|(_, c)| *c)
                    .collect();
                let state = ActionState::holding(&held);
                let (transition, next) = evaluate(&signals(&raised), state);

                let changed: Vec<_> = categories
                    .iter()
                    .filter(|&&c| state.is_held(c) != next.is_held(c))
                    .collect();
                match transition {
                    RisingEdge(c) => {
                        assert_eq!(changed, vec![&c]);
                        assert!(next.is_held(c));
                    }
                    FallingEdge(c) => {
                        assert_eq!(changed, vec![&c]);
                        assert!(!next.is_held(c));
                    }
                    Transition::Held(_) | Transition::Idle => assert!(changed.is_empty()),
                }
            }
        }
    }
}
