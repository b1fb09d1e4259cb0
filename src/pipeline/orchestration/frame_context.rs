use crate::common::Observation;
use crate::pipeline::services::Dispatch;
use crate::pipeline::types::{ExtensionVector, LanePosition, RawSignalSet, Transition};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::time::Instant;

/// Everything computed for a single frame as it moves through the steps.
#[derive(Debug, Clone)]
pub struct FrameContext {
    pub observation: Observation,
    pub extension: Option<ExtensionVector>,
    pub lane: Option<LanePosition>,
    pub signals: Option<RawSignalSet>,
    pub transition: Option<Transition>,
    pub dispatch: Option<Dispatch>,
    pub metrics: FrameMetrics,
    pub processing_start: Instant,
}

impl FrameContext {
    pub fn new(observation: Observation) -> Self {
        let captured_at = observation.captured_at();
        Self {
            observation,
            extension: None,
            lane: None,
            signals: None,
            transition: None,
            dispatch: None,
            metrics: FrameMetrics::new(captured_at),
            processing_start: Instant::now(),
        }
    }
}

/// Metrics collected during frame processing
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Step name to duration, in execution order.
    pub step_durations_us: IndexMap<&'static str, u64>,
    pub total_processing_duration_us: u64,
    /// When the provider captured the frame, not when it was processed.
    pub captured_at: Option<DateTime<Utc>>,
}

impl FrameMetrics {
    pub fn new(captured_at: DateTime<Utc>) -> Self {
        Self {
            captured_at: Some(captured_at),
            ..Self::default()
        }
    }

    pub fn record_duration(&mut self, step: &'static str, duration_us: u64) {
        self.step_durations_us.insert(step, duration_us);
    }

    pub fn finalize(&mut self, start_time: Instant) {
        self.total_processing_duration_us = start_time.elapsed().as_micros() as u64;
    }
}
