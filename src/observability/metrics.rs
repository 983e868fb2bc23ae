use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub estimates_total: IntCounterVec,
    pub placeholder_arrivals_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let estimates_total = IntCounterVec::new(
            Opts::new("estimates_total", "Total trip estimates by flow and outcome"),
            &["flow", "outcome"],
        )
        .expect("valid estimates_total metric");

        let placeholder_arrivals_total = IntCounter::new(
            "placeholder_arrivals_total",
            "Previews answered with a placeholder arrival time",
        )
        .expect("valid placeholder_arrivals_total metric");

        registry
            .register(Box::new(estimates_total.clone()))
            .expect("register estimates_total");
        registry
            .register(Box::new(placeholder_arrivals_total.clone()))
            .expect("register placeholder_arrivals_total");

        Self {
            registry,
            estimates_total,
            placeholder_arrivals_total,
        }
    }

    pub fn record_estimate(&self, flow: &str, success: bool) {
        let outcome = if success { "success" } else { "error" };
        self.estimates_total
            .with_label_values(&[flow, outcome])
            .inc();
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
