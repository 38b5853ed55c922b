use std::sync::Arc;

use backend_domain::ports::BrawlDataSource;
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub data_source: Arc<dyn BrawlDataSource>,
    pub metrics: Arc<Metrics>,
}
