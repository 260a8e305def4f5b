//! Prometheus metrics for the gateway.
//!
//! Tracks inbound request volume and upstream call behaviour.

use prometheus::{Histogram, HistogramOpts, IntCounter, Opts, Registry};
use std::sync::Arc;

use crate::error::AppError;

/// Metrics collector for menugate
#[derive(Clone)]
pub struct Metrics {
    pub registry: Arc<Registry>,

    // Inbound request metrics
    pub requests_total: IntCounter,

    // Upstream forwarding metrics
    pub upstream_requests: IntCounter,
    pub upstream_failures: IntCounter,
    pub upstream_latency: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, AppError> {
        let registry = Registry::new();

        let requests_total = IntCounter::with_opts(Opts::new(
            "menugate_requests_total",
            "Total number of inbound HTTP requests",
        ))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create metric: {}", e)))?;

        let upstream_requests = IntCounter::with_opts(Opts::new(
            "menugate_upstream_requests_total",
            "Total number of calls forwarded to the provider",
        ))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create metric: {}", e)))?;

        let upstream_failures = IntCounter::with_opts(Opts::new(
            "menugate_upstream_failures_total",
            "Total number of provider calls that produced no response",
        ))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create metric: {}", e)))?;

        let upstream_latency = Histogram::with_opts(
            HistogramOpts::new(
                "menugate_upstream_latency_seconds",
                "Duration of provider calls in seconds",
            )
            .buckets(vec![
                0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.0, 2.0, 5.0,
            ]),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create metric: {}", e)))?;

        registry
            .register(Box::new(requests_total.clone()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to register metric: {}", e)))?;
        registry
            .register(Box::new(upstream_requests.clone()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to register metric: {}", e)))?;
        registry
            .register(Box::new(upstream_failures.clone()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to register metric: {}", e)))?;
        registry
            .register(Box::new(upstream_latency.clone()))
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to register metric: {}", e)))?;

        Ok(Self {
            registry: Arc::new(registry),
            requests_total,
            upstream_requests,
            upstream_failures,
            upstream_latency,
        })
    }

    /// Record an inbound request
    pub fn record_request(&self) {
        self.requests_total.inc();
    }

    /// Record a forwarded provider call
    pub fn record_upstream_request(&self) {
        self.upstream_requests.inc();
    }

    /// Record a provider call that produced no response
    pub fn record_upstream_failure(&self) {
        self.upstream_failures.inc();
    }

    /// Observe latency for a provider call in seconds
    pub fn record_upstream_latency(&self, seconds: f64) {
        self.upstream_latency.observe(seconds);
    }

    /// Export metrics in Prometheus format
    pub fn export(&self) -> Result<String, AppError> {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode metrics: {}", e)))?;

        String::from_utf8(buffer).map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to convert metrics to string: {}",
                e
            ))
        })
    }
}
