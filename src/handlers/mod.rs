pub mod estimate;
pub mod health;
pub mod leads;
pub mod metrics_handler;

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::config::Config;
use crate::leads::LeadSink;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
    /// Swapped on config reload
    pub lead_sink: Arc<ArcSwap<Arc<dyn LeadSink>>>,
}

impl AppState {
    pub fn new(config: Config, lead_sink: Arc<dyn LeadSink>) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            lead_sink: Arc::new(ArcSwap::from_pointee(lead_sink)),
        }
    }

    /// Current lead sink
    pub fn sink(&self) -> Arc<dyn LeadSink> {
        self.lead_sink.load_full().as_ref().clone()
    }
}
