pub mod classification_step;
pub mod dispatch_step;
pub mod resolution_step;
pub mod scheduling_step;

pub use classification_step::ClassificationStep;
pub use dispatch_step::DispatchStep;
pub use resolution_step::ResolutionStep;
pub use scheduling_step::SchedulingStep;
