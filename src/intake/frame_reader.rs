use crate::common::Observation;
use crate::error::FrameError;
use async_trait::async_trait;

/// Source of per-frame hand observations.
///
/// Contract: every observation either has no hand or exactly one hand of
/// 21 landmarks, and observations are yielded in capture order. `Ok(None)`
/// marks the end of the stream.
#[async_trait]
pub trait FrameReader: Send {
    async fn read(&mut self) -> Result<Option<Observation>, FrameError>;
}
