//! API 服务的共享状态

use crate::orchestrator::ResultAggregator;
use std::sync::Arc;

/// 所有 handler 共享
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<ResultAggregator>,
}

impl AppState {
    pub fn new(aggregator: ResultAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}
