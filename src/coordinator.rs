use crate::{
    common::Observation, config::Configuration, error::AppError, error::FrameError,
    intake::FrameReader, pipeline::GestureOrchestrator,
};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Wires the landmark reader to the gesture orchestrator through a bounded
/// channel. One reader task, one processing task, frames in arrival order.
pub struct Coordinator {
    configuration: Configuration,
    orchestrator: GestureOrchestrator,
    cancel_token: CancellationToken,
}

impl Coordinator {
    fn new(configuration: Configuration, orchestrator: GestureOrchestrator) -> Self {
        Self {
            configuration,
            orchestrator,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Token that stops both tasks when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Runs until the reader is exhausted and every queued frame has been
    /// processed, the token is cancelled, or the reader fails.
    pub async fn run<R>(self, reader: R) -> Result<(), AppError>
    where
        R: FrameReader + 'static,
    {
        let (frame_tx, frame_rx) = tokio::sync::mpsc::channel(self.configuration.frame_buffer_size);

        let reader_task = Self::start_reader_task(
            reader,
            frame_tx,
            self.configuration.skip_malformed_frames,
            self.cancel_token.clone(),
        );
        let pipeline_task = tokio::spawn(
            self.orchestrator
                .start_processing(frame_rx, self.cancel_token.clone()),
        );

        let reader_result = reader_task
            .await
            .map_err(|e| AppError::Pipeline(format!("Reader task failed: {}", e)))?;
        if reader_result.is_err() {
            self.cancel_token.cancel();
        }

        let pipeline_result = pipeline_task
            .await
            .map_err(|e| AppError::Pipeline(format!("Pipeline task failed: {}", e)))?;

        reader_result?;
        pipeline_result
    }

    fn start_reader_task<R>(
        mut reader: R,
        frame_tx: Sender<Observation>,
        skip_malformed_frames: bool,
        cancel_token: CancellationToken,
    ) -> JoinHandle<Result<(), FrameError>>
    where
        R: FrameReader + 'static,
    {
        tokio::spawn(async move {
            let mut frames_read = 0usize;
            loop {
                let next = tokio::select! {
                    _ = cancel_token.cancelled() => break,
                    next = reader.read() => next,
                };

                match next {
                    Ok(Some(observation)) => {
                        frames_read += 1;
                        if frame_tx.send(observation).await.is_err() {
                            debug!("Pipeline closed, stopping reader");
                            break;
                        }
                    }
                    Ok(None) => {
                        info!("Landmark stream ended after {} frames", frames_read);
                        break;
                    }
                    Err(e) if skip_malformed_frames && e.is_recoverable() => {
                        warn!("Skipping frame: {}", e);
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        })
    }
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    orchestrator: Option<GestureOrchestrator>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            orchestrator: None,
        }
    }

    // Adjusts the frame buffer size, this will override the loaded configuration.
    pub fn frame_buffer_size(mut self, frame_buffer_size: usize) -> Self {
        self.configuration.frame_buffer_size = frame_buffer_size;
        self
    }

    pub fn skip_malformed_frames(mut self, skip: bool) -> Self {
        self.configuration.skip_malformed_frames = skip;
        self
    }

    pub fn orchestrator(mut self, orchestrator: GestureOrchestrator) -> Self {
        self.orchestrator = Some(orchestrator);
        self
    }

    pub fn build(self) -> Result<Coordinator, AppError> {
        self.configuration.validate()?;
        let orchestrator = self
            .orchestrator
            .ok_or(AppError::Pipeline("Orchestrator not set".to_string()))?;
        Ok(Coordinator::new(self.configuration, orchestrator))
    }
}
