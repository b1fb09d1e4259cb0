use crate::pipeline::types::{ExtensionVector, LanePosition, RawSignalSet};

/// Turns finger extension and lane position into the frame's raw signals.
///
/// The lane group (move left/right) and the shape group (jump/duck) are
/// resolved independently, so one frame may carry a signal from each.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureResolver;

impl GestureResolver {
    pub fn resolve(&self, extension: &ExtensionVector, lane: LanePosition) -> RawSignalSet {
        let mut signals = RawSignalSet::none();

        match lane {
            LanePosition::Right => signals.move_right = true,
            LanePosition::Left => signals.move_left = true,
            LanePosition::Center => {}
        }

        // Open palm is checked first and wins over hang-loose.
        if extension.all_extended() {
            signals.jump = true;
        } else if extension.is_hang_loose() {
            signals.duck = true;
        }

        signals
    }
}
