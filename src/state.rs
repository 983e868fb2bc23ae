use crate::config::Config;
use crate::engine::eta::EtaProjector;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub projector: EtaProjector,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            projector: EtaProjector::new(config.average_speed_kmh),
            metrics: Metrics::new(),
        }
    }
}
