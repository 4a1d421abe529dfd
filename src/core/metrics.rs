//! Handshake metrics.
//!
//! A process-wide counter tracks total handshake calls, incremented once
//! per call regardless of outcome, and is exposed through the `/metrics`
//! endpoint in Prometheus text exposition format. The single counter is
//! rendered by hand over an atomic; no collector registry is involved.

use std::sync::atomic::{AtomicU64, Ordering};

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Counters exposed on the metrics endpoint.
#[derive(Debug, Default)]
pub struct HandshakeMetrics {
    handshake_requests: AtomicU64,
}

impl HandshakeMetrics {
    /// Create a fresh counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one handshake call.
    pub fn record_handshake(&self) {
        self.handshake_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Total handshake calls observed so far.
    pub fn handshake_total(&self) -> u64 {
        self.handshake_requests.load(Ordering::Relaxed)
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        format!(
            "# HELP handshake_requests_total Total number of MCP handshake requests\n\
             # TYPE handshake_requests_total counter\n\
             handshake_requests_total {}\n",
            self.handshake_total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let metrics = HandshakeMetrics::new();
        assert_eq!(metrics.handshake_total(), 0);
    }

    #[test]
    fn test_record_handshake_increments() {
        let metrics = HandshakeMetrics::new();
        metrics.record_handshake();
        metrics.record_handshake();
        assert_eq!(metrics.handshake_total(), 2);
    }

    #[test]
    fn test_render_exposition_format() {
        let metrics = HandshakeMetrics::new();
        metrics.record_handshake();

        let body = metrics.render();
        assert!(body.contains("# TYPE handshake_requests_total counter"));
        assert!(body.contains("handshake_requests_total 1"));
    }
}
