use metrics::{counter, gauge};

/// Hub counters. Recorded through the `metrics` facade; no exporter is installed.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "taller_hub",
        }
    }

    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn identifier_received(&self) {
        counter!(format!("{}.identifiers.received", self.prefix)).increment(1);
    }

    pub fn frames_delivered(&self, count: usize) {
        counter!(format!("{}.frames.delivered", self.prefix)).increment(count as u64);
    }

    pub fn frames_failed(&self, count: usize) {
        if count > 0 {
            counter!(format!("{}.frames.failed", self.prefix)).increment(count as u64);
        }
    }

    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
