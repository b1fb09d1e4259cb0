pub mod action_scheduler;
pub mod dispatcher;
pub mod extension_classifier;
pub mod gesture_resolver;
pub mod lane_classifier;

pub use action_scheduler::{ActionScheduler, ActionState};
pub use dispatcher::{Dispatch, Dispatcher};
pub use extension_classifier::ExtensionClassifier;
pub use gesture_resolver::GestureResolver;
pub use lane_classifier::LaneClassifier;
