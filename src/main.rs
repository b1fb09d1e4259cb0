use gesture_lanes::config::{Configuration, InjectorKind};
use gesture_lanes::coordinator::CoordinatorBuilder;
use gesture_lanes::error::AppError;
use gesture_lanes::injector::{JsonLinesInjector, KeyInjector, LoggingInjector};
use gesture_lanes::intake::JsonLinesReader;
use gesture_lanes::pipeline::orchestration::{MetricsCollector, PerformanceMonitor};
use gesture_lanes::pipeline::{GestureOrchestrator, PipelineFactory};
use tracing::{Level, info};

// Logs go to stderr; stdout may carry tap commands.
fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let mut configuration = Configuration::load()?;
    if let Some(path) = std::env::args().nth(1) {
        configuration.input = Some(path.into());
    }
    init_logging(configuration.log_level());

    let injector: Box<dyn KeyInjector> = match configuration.injector {
        InjectorKind::Log => Box::new(LoggingInjector),
        InjectorKind::Stdout => Box::new(JsonLinesInjector::new(tokio::io::stdout())),
    };

    let monitor = PerformanceMonitor::new();
    let stats = monitor.get_stats_shared();
    let orchestrator = GestureOrchestrator::new(
        PipelineFactory::gesture_pipeline(),
        injector,
        MetricsCollector::new().add_observer(Box::new(monitor)),
    );

    let input = configuration.input.clone();
    let coordinator = CoordinatorBuilder::new(configuration)
        .orchestrator(orchestrator)
        .build()?;

    let cancel_token = coordinator.cancel_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, shutting down");
            cancel_token.cancel();
        }
    });

    match input {
        Some(path) => {
            info!("Reading landmarks from {}", path.display());
            let file = tokio::fs::File::open(&path).await?;
            coordinator.run(JsonLinesReader::new(file)).await?;
        }
        None => {
            info!("Reading landmarks from stdin");
            coordinator.run(JsonLinesReader::new(tokio::io::stdin())).await?;
        }
    }

    if let Ok(stats) = stats.lock() {
        info!(
            "Processed {} frames, sent {} taps, average frame time {:.0}us, last fps {:.1}",
            stats.total_frames_processed,
            stats.total_taps_sent,
            stats.average_frame_time_us,
            stats.frames_per_second
        );
    }
    Ok(())
}
