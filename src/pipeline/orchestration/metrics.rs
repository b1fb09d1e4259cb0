use super::frame_context::FrameMetrics;
use crate::pipeline::types::GameKey;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Observer pattern for metrics collection
pub trait MetricsObserver: Send {
    fn on_frame_processed(&mut self, frame_id: Uuid, metrics: &FrameMetrics);
    fn on_tap_sent(&mut self, frame_id: Uuid, key: GameKey);
}

/// Collects and manages multiple metrics observers
#[derive(Default)]
pub struct MetricsCollector {
    observers: Vec<Box<dyn MetricsObserver>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn add_observer(mut self, observer: Box<dyn MetricsObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn notify_frame_processed(&mut self, frame_id: Uuid, metrics: &FrameMetrics) {
        for observer in &mut self.observers {
            observer.on_frame_processed(frame_id, metrics);
        }
    }

    pub fn notify_tap_sent(&mut self, frame_id: Uuid, key: GameKey) {
        for observer in &mut self.observers {
            observer.on_tap_sent(frame_id, key);
        }
    }
}

/// Frame rate and processing time, as shown on the overlay.
#[derive(Debug, Clone, Default)]
pub struct PerformanceStats {
    pub total_frames_processed: usize,
    pub total_taps_sent: usize,
    pub average_frame_time_us: f32,
    pub frames_per_second: f32,
    /// Capture time of the most recent frame.
    pub last_frame_at: Option<DateTime<Utc>>,
}

/// Performance monitoring observer
pub struct PerformanceMonitor {
    stats: Arc<Mutex<PerformanceStats>>,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceMonitor {
    const ALPHA: f32 = 0.1; // EWMA smoothing factor

    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(PerformanceStats::default())),
        }
    }

    pub fn get_stats_shared(&self) -> Arc<Mutex<PerformanceStats>> {
        Arc::clone(&self.stats)
    }

    pub fn record_frame(&mut self, metrics: &FrameMetrics) {
        let Ok(mut stats) = self.stats.lock() else {
            return;
        };
        stats.total_frames_processed += 1;
        stats.average_frame_time_us = if stats.total_frames_processed == 1 {
            metrics.total_processing_duration_us as f32
        } else {
            Self::update_ewma(
                stats.average_frame_time_us,
                metrics.total_processing_duration_us,
            )
        };

        // Instantaneous rate from the capture gap since the previous frame.
        let Some(captured_at) = metrics.captured_at else {
            return;
        };
        if let Some(previous) = stats.last_frame_at {
            let elapsed_us = (captured_at - previous).num_microseconds().unwrap_or(0);
            if elapsed_us > 0 {
                stats.frames_per_second = 1_000_000.0 / elapsed_us as f32;
            }
        }
        stats.last_frame_at = Some(captured_at);
    }

    fn update_ewma(current: f32, new_value: u64) -> f32 {
        current * (1.0 - Self::ALPHA) + new_value as f32 * Self::ALPHA
    }
}

impl MetricsObserver for PerformanceMonitor {
    fn on_frame_processed(&mut self, _frame_id: Uuid, metrics: &FrameMetrics) {
        self.record_frame(metrics);
    }

    fn on_tap_sent(&mut self, _frame_id: Uuid, _key: GameKey) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.total_taps_sent += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn metrics(total_us: u64, captured_at: DateTime<Utc>) -> FrameMetrics {
        FrameMetrics {
            total_processing_duration_us: total_us,
            ..FrameMetrics::new(captured_at)
        }
    }

    fn start() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    #[test]
    fn fps_comes_from_capture_interval() {
        let mut monitor = PerformanceMonitor::new();
        let stats = monitor.get_stats_shared();

        monitor.record_frame(&metrics(100, start()));
        assert_eq!(stats.lock().unwrap().frames_per_second, 0.0);

        monitor.record_frame(&metrics(100, start() + TimeDelta::milliseconds(40)));
        let fps = stats.lock().unwrap().frames_per_second;
        assert!((fps - 25.0).abs() < 0.01, "fps was {fps}");
        assert_eq!(
            stats.lock().unwrap().last_frame_at,
            Some(start() + TimeDelta::milliseconds(40))
        );
    }

    #[test]
    fn fps_ignores_processing_delay() {
        // Two frames captured 50ms apart but processed back to back.
        let mut monitor = PerformanceMonitor::new();
        monitor.record_frame(&metrics(100, start()));
        monitor.record_frame(&metrics(100, start() + TimeDelta::milliseconds(50)));

        let fps = monitor.get_stats_shared().lock().unwrap().frames_per_second;
        assert!((fps - 20.0).abs() < 0.01, "fps was {fps}");
    }

    #[test]
    fn average_frame_time_is_smoothed() {
        let mut monitor = PerformanceMonitor::new();
        monitor.record_frame(&metrics(1000, start()));
        monitor.record_frame(&metrics(2000, start() + TimeDelta::milliseconds(10)));

        let stats = monitor.get_stats_shared();
        let stats = stats.lock().unwrap();
        assert_eq!(stats.total_frames_processed, 2);
        assert!((stats.average_frame_time_us - 1100.0).abs() < 0.01);
    }

    #[test]
    fn collector_fans_out_taps() {
        let monitor = PerformanceMonitor::new();
        let stats = monitor.get_stats_shared();
        let mut collector = MetricsCollector::new().add_observer(Box::new(monitor));

        collector.notify_tap_sent(Uuid::new_v4(), GameKey::Up);
        collector.notify_tap_sent(Uuid::new_v4(), GameKey::Left);
        collector.notify_frame_processed(Uuid::new_v4(), &metrics(10, start()));

        let stats = stats.lock().unwrap();
        assert_eq!(stats.total_taps_sent, 2);
        assert_eq!(stats.total_frames_processed, 1);
    }
}
