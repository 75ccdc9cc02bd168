use std::time::{Duration, Instant};

/// Tracks how long the process has been up.
#[derive(Debug, Clone)]
pub struct UptimeMonitor {
    start_time: Instant,
}

impl UptimeMonitor {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.uptime().as_secs_f64()
    }

    pub fn log_stats(&self, phase: &str) {
        tracing::info!("📊 {} - Uptime: {:?}", phase, self.uptime());
    }
}

impl Default for UptimeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_is_monotonic() {
        let monitor = UptimeMonitor::new();
        let first = monitor.uptime();
        std::thread::sleep(Duration::from_millis(5));
        let second = monitor.uptime();

        assert!(second > first);
        assert!(monitor.uptime_seconds() >= 0.005);
    }
}
