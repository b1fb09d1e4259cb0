use super::{FrameContext, MetricsCollector, ProcessingPipeline};
use crate::common::Observation;
use crate::error::AppError;
use crate::injector::KeyInjector;
use crate::pipeline::types::{GameKey, Transition};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// What happened on one frame: the overlay's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameOutcome {
    pub frame_id: Uuid,
    pub transition: Transition,
    pub tap: Option<GameKey>,
    pub status: String,
}

/// Drives observations through the gesture pipeline one at a time and
/// performs the resulting taps.
pub struct GestureOrchestrator {
    pipeline: ProcessingPipeline,
    injector: Box<dyn KeyInjector>,
    metrics_collector: MetricsCollector,
    last_status: Option<String>,
}

impl GestureOrchestrator {
    pub fn new(
        pipeline: ProcessingPipeline,
        injector: Box<dyn KeyInjector>,
        metrics_collector: MetricsCollector,
    ) -> Self {
        Self {
            pipeline,
            injector,
            metrics_collector,
            last_status: None,
        }
    }

    /// Process a single frame through the pipeline
    #[instrument(skip_all, fields(frame_id = %observation.frame_id()))]
    pub async fn process_frame(&mut self, observation: Observation) -> Result<FrameOutcome, AppError> {
        let frame_id = observation.frame_id();
        let context = FrameContext::new(observation);

        let mut context = self.pipeline.process(context)?;

        let transition = context.transition.ok_or_else(|| {
            AppError::Pipeline("Pipeline finished without a transition".to_string())
        })?;
        let dispatch = context.dispatch.take().ok_or_else(|| {
            AppError::Pipeline("Pipeline finished without a dispatch".to_string())
        })?;

        // Taps are fire-and-forget: a failed injection does not undo the
        // state change that produced it.
        if let Some(key) = dispatch.tap {
            match self.injector.tap(key).await {
                Ok(()) => {
                    debug!("Tapped {} via {}", key, self.injector.name());
                    self.metrics_collector.notify_tap_sent(frame_id, key);
                }
                Err(e) => warn!("Failed to tap {} via {}: {}", key, self.injector.name(), e),
            }
        }

        if self.last_status.as_deref() != Some(dispatch.status.as_str()) {
            info!(status = %dispatch.status, ?transition, "Status changed");
            self.last_status = Some(dispatch.status.clone());
        }

        context.metrics.finalize(context.processing_start);
        self.metrics_collector
            .notify_frame_processed(frame_id, &context.metrics);

        Ok(FrameOutcome {
            frame_id,
            transition,
            tap: dispatch.tap,
            status: dispatch.status,
        })
    }

    /// Consume observations in arrival order until the channel closes or
    /// `cancel_token` fires.
    pub async fn start_processing(
        mut self,
        mut frame_rx: mpsc::Receiver<Observation>,
        cancel_token: CancellationToken,
    ) -> Result<(), AppError> {
        info!("Gesture orchestrator started - waiting for frames...");

        loop {
            let observation = tokio::select! {
                biased;
                _ = cancel_token.cancelled() => break,
                observation = frame_rx.recv() => match observation {
                    Some(observation) => observation,
                    None => break,
                },
            };

            if let Err(e) = self.process_frame(observation).await {
                error!("Error processing frame: {}", e);
            }
        }

        info!("Gesture orchestrator stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InjectorError;
    use crate::injector::ChannelInjector;
    use crate::pipeline::PipelineFactory;
    use crate::pipeline::services::extension_classifier::fixtures::hand;
    use crate::pipeline::types::ActionCategory;
    use async_trait::async_trait;

    fn orchestrator() -> (GestureOrchestrator, mpsc::Receiver<GameKey>) {
        let (key_tx, key_rx) = mpsc::channel(16);
        let orchestrator = GestureOrchestrator::new(
            PipelineFactory::gesture_pipeline(),
            Box::new(ChannelInjector::new(key_tx)),
            MetricsCollector::new(),
        );
        (orchestrator, key_rx)
    }

    const PEACE: [bool; 5] = [false, true, true, false, false];
    const OPEN_PALM: [bool; 5] = [true; 5];

    #[tokio::test]
    async fn left_lane_press_hold_release_idle() {
        let (mut orchestrator, mut key_rx) = orchestrator();

        let first = orchestrator
            .process_frame(Observation::with_hand(hand(0.1, PEACE)))
            .await
            .unwrap();
        assert_eq!(first.transition, Transition::RisingEdge(ActionCategory::MoveLeft));
        assert_eq!(first.tap, Some(GameKey::Left));
        assert_eq!(first.status, "Move LEFT (Press)");

        let second = orchestrator
            .process_frame(Observation::with_hand(hand(0.1, PEACE)))
            .await
            .unwrap();
        assert_eq!(second.transition, Transition::Held(ActionCategory::MoveLeft));
        assert_eq!(second.tap, None);
        assert_eq!(second.status, "MOVE LEFT (Held)");

        let third = orchestrator.process_frame(Observation::no_hand()).await.unwrap();
        assert_eq!(third.transition, Transition::FallingEdge(ActionCategory::MoveLeft));
        assert_eq!(third.tap, None);

        let fourth = orchestrator.process_frame(Observation::no_hand()).await.unwrap();
        assert_eq!(fourth.transition, Transition::Idle);
        assert_eq!(fourth.status, "Idle (Middle Lane)");

        assert_eq!(key_rx.try_recv(), Ok(GameKey::Left));
        assert!(key_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn held_gesture_taps_once() {
        let (mut orchestrator, mut key_rx) = orchestrator();

        let mut statuses = Vec::new();
        for _ in 0..5 {
            let outcome = orchestrator
                .process_frame(Observation::with_hand(hand(0.5, OPEN_PALM)))
                .await
                .unwrap();
            statuses.push(outcome.status);
        }

        assert_eq!(statuses[0], "JUMP (Press)");
        assert!(statuses[1..].iter().all(|status| status == "JUMP (Held)"));
        assert_eq!(key_rx.try_recv(), Ok(GameKey::Up));
        assert!(key_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn simultaneous_gestures_tap_on_consecutive_frames() {
        let (mut orchestrator, mut key_rx) = orchestrator();

        for _ in 0..3 {
            orchestrator
                .process_frame(Observation::with_hand(hand(0.9, OPEN_PALM)))
                .await
                .unwrap();
        }

        assert_eq!(key_rx.try_recv(), Ok(GameKey::Right));
        assert_eq!(key_rx.try_recv(), Ok(GameKey::Up));
        assert!(key_rx.try_recv().is_err());
    }

    struct FailingInjector;

    #[async_trait]
    impl KeyInjector for FailingInjector {
        async fn tap(&mut self, _key: GameKey) -> Result<(), InjectorError> {
            Err(InjectorError::Send("unplugged".to_string()))
        }

        fn name(&self) -> &'static str {
            "FailingInjector"
        }
    }

    #[tokio::test]
    async fn injector_failure_does_not_fail_the_frame() {
        let mut orchestrator = GestureOrchestrator::new(
            PipelineFactory::gesture_pipeline(),
            Box::new(FailingInjector),
            MetricsCollector::new(),
        );

        let outcome = orchestrator
            .process_frame(Observation::with_hand(hand(0.9, PEACE)))
            .await
            .unwrap();
        assert_eq!(outcome.tap, Some(GameKey::Right));

        let outcome = orchestrator
            .process_frame(Observation::with_hand(hand(0.9, PEACE)))
            .await
            .unwrap();
        assert_eq!(outcome.transition, Transition::Held(ActionCategory::MoveRight));
    }

    #[tokio::test]
    async fn processes_channel_until_closed() {
        let (orchestrator, mut key_rx) = orchestrator();
        let (frame_tx, frame_rx) = mpsc::channel(8);

        frame_tx
            .send(Observation::with_hand(hand(0.1, PEACE)))
            .await
            .unwrap();
        frame_tx.send(Observation::no_hand()).await.unwrap();
        frame_tx
            .send(Observation::with_hand(hand(0.9, PEACE)))
            .await
            .unwrap();
        drop(frame_tx);

        orchestrator
            .start_processing(frame_rx, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(key_rx.recv().await, Some(GameKey::Left));
        assert_eq!(key_rx.recv().await, Some(GameKey::Right));
    }
}
