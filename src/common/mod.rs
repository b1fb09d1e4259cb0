pub mod landmark;

pub use landmark::{HandLandmark, LANDMARK_COUNT, Landmark, LandmarkCountError, LandmarkFrame, Observation};
